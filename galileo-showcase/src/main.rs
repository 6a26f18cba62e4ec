//! Catalog of Galileo map examples.

use anyhow::{anyhow, Result};
use galileo_showcase::app::{create_start_map, ShowcaseApp};
use galileo_showcase::catalog::registry::default_catalog;
use galileo_showcase::{ExampleCatalogController, PlatformCapabilities, ShowcaseConfig};

fn main() -> Result<()> {
    let config = ShowcaseConfig::load()?;
    let capabilities = PlatformCapabilities::resolve(&config);
    let controller = ExampleCatalogController::new(default_catalog()?, capabilities);
    let map = create_start_map(&config, controller.provider())?;

    galileo_egui::InitBuilder::new(map)
        .with_app_builder(move |egui_map_state| {
            Box::new(ShowcaseApp::new(controller, egui_map_state, config))
        })
        .init()
        .map_err(|err| anyhow!("failed to run the showcase: {err}"))
}
