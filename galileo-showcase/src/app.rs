//! Egui application showing the catalog and the example maps.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use galileo::galileo_types::geo::impls::GeoPoint2d;
use galileo::galileo_types::geo::NewGeoPoint;
use galileo::layer::raster_tile_layer::RasterTileLayerBuilder;
use galileo::layer::RasterTileLayer;
use galileo::tile_schema::TileIndex;
use galileo::{Map, MapBuilder, Messenger};
use galileo_egui::{EguiMap, EguiMapState};

use crate::catalog::registry::ExampleScreen;
use crate::config::ShowcaseConfig;
use crate::controller::{ExampleCatalogController, ScreenFactory, View};
use crate::error::ShowcaseError;
use crate::provider::MapProvider;
use crate::screen::TileSource;

/// Creates a raster tile layer showing `source` tiles from the given provider.
pub fn build_layer(
    source: &TileSource,
    provider: MapProvider,
    config: &ShowcaseConfig,
    messenger: Option<impl Messenger + 'static>,
) -> Result<RasterTileLayer, ShowcaseError> {
    let url_source = source.clone();
    let alternate = config.alternate.clone();
    let (attribution, attribution_url) = source.attribution(provider);

    let mut builder = RasterTileLayerBuilder::new_rest(move |index: &TileIndex| {
        url_source.url(provider, &alternate, index.z, index.x, index.y)
    })
    .with_file_cache_checked(config.tile_cache_path())
    .with_attribution(attribution.to_string(), attribution_url.to_string());

    if let Some(messenger) = messenger {
        builder = builder.with_messenger(messenger);
    }

    Ok(builder.build()?)
}

/// Creates the map shown before any example is opened.
pub fn create_start_map(
    config: &ShowcaseConfig,
    provider: MapProvider,
) -> Result<Map, ShowcaseError> {
    let layer = build_layer(&TileSource::Standard, provider, config, None::<RedrawMessenger>)?;

    Ok(MapBuilder::default()
        .with_latlon(config.start.lat, config.start.lon)
        .with_z_level(config.start.z_level)
        .with_layer(layer)
        .build())
}

/// Collects redraw requests of the layers created after the map widget was initialized.
#[derive(Debug, Clone)]
pub struct RedrawMessenger {
    requires_redraw: Arc<AtomicBool>,
    context: egui::Context,
}

impl RedrawMessenger {
    /// Creates a messenger repainting the given context.
    pub fn new(context: egui::Context) -> Self {
        Self {
            requires_redraw: Arc::new(AtomicBool::new(false)),
            context,
        }
    }

    fn take_request(&self) -> bool {
        self.requires_redraw.swap(false, Ordering::Relaxed)
    }
}

impl Messenger for RedrawMessenger {
    fn request_redraw(&self) {
        log::trace!("Redraw requested by example layer");
        if !self.requires_redraw.swap(true, Ordering::Relaxed) {
            self.context.request_repaint();
        }
    }
}

/// Map widget state reused by all example screens.
pub struct MapScreens {
    map: EguiMapState,
    position: GeoPoint2d,
    resolution: f64,
    messenger: Option<RedrawMessenger>,
    config: ShowcaseConfig,
}

impl MapScreens {
    fn new(map: EguiMapState, config: ShowcaseConfig) -> Self {
        let position = GeoPoint2d::latlon(config.start.lat, config.start.lon);
        let resolution = config.start.resolution();

        Self {
            map,
            position,
            resolution,
            messenger: None,
            config,
        }
    }

    fn attach_context(&mut self, ctx: &egui::Context) {
        if self.messenger.is_none() {
            self.messenger = Some(RedrawMessenger::new(ctx.clone()));
        }
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        if self
            .messenger
            .as_ref()
            .is_some_and(|messenger| messenger.take_request())
        {
            self.map.request_redraw();
        }

        EguiMap::new(&mut self.map)
            .with_position(&mut self.position)
            .with_resolution(&mut self.resolution)
            .show_ui(ui);
    }
}

impl ScreenFactory<ExampleScreen> for MapScreens {
    fn instantiate(&mut self, screen: ExampleScreen, provider: MapProvider) {
        let spec = screen.spec();

        match build_layer(
            &spec.tiles,
            provider,
            &self.config,
            self.messenger.clone(),
        ) {
            Ok(layer) => {
                let layers = self.map.map_mut().layers_mut();
                // The map always holds exactly one tile layer.
                layers.remove(0);
                layers.push(layer);
            }
            Err(err) => {
                log::warn!("Keeping previous tiles for {screen:?}: {err}");
            }
        }

        self.position = GeoPoint2d::latlon(spec.camera.lat, spec.camera.lon);
        self.resolution = spec.camera.resolution();
        self.map.request_redraw();
    }
}

/// The showcase application.
pub struct ShowcaseApp {
    controller: ExampleCatalogController<ExampleScreen>,
    screens: MapScreens,
}

impl ShowcaseApp {
    /// Creates the application in the catalog view.
    pub fn new(
        controller: ExampleCatalogController<ExampleScreen>,
        map: EguiMapState,
        config: ShowcaseConfig,
    ) -> Self {
        Self {
            controller,
            screens: MapScreens::new(map, config),
        }
    }

    fn show_catalog(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);

                    if self.controller.capabilities().has_multiple_providers() {
                        let mut toggle = self.controller.provider_toggle();
                        if ui
                            .checkbox(&mut toggle, "Use alternate provider?")
                            .changed()
                        {
                            self.controller.set_provider_toggle(toggle);
                        }
                        ui.add_space(10.0);
                    }

                    let mut selected = None;
                    for entry in self.controller.visible_entries() {
                        ui.add_space(10.0);
                        if ui.button(&*entry.title).clicked() {
                            selected = Some(entry.key.to_string());
                        }
                    }

                    if let Some(title) = selected {
                        self.controller.select_example(&title, &mut self.screens);
                    }

                    ui.add_space(40.0);
                });
            });
        });
    }

    fn show_example(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| {
                self.screens.show(ui);
            });

        let title = self
            .controller
            .active_entry()
            .map(|entry| entry.title().to_string())
            .unwrap_or_default();
        let provider = self.controller.provider();

        let mut back = false;
        egui::Window::new("Example")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::LEFT_TOP, [12.0, 20.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    back = ui.button("←").clicked();
                    ui.label(title);
                });
                ui.small(format!("Tiles: {provider}"));
            });

        if back {
            self.controller.go_back();
        }
    }
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.screens.attach_context(ctx);

        match self.controller.view() {
            View::Catalog => self.show_catalog(ctx),
            View::Example(_) => self.show_example(ctx),
        }
    }
}
