//! Galileo showcase is a catalog of small example screens, each demonstrating one feature of the
//! [`galileo`] map engine.
//!
//! # Main components
//!
//! * [`Catalog`] is a static ordered list of [`CatalogEntry`] values. An entry references an
//!   example screen by an opaque handle (an [`ExampleScreen`] in the application) and carries a
//!   unique title, a flag telling whether the example works with the alternate tile provider, and
//!   an optional label shown next to the title while that provider is active.
//! * [`ExampleCatalogController`] owns the catalog and the session state. It computes which entries
//!   are visible and how they are titled, opens an example through a [`ScreenFactory`] and returns
//!   to the catalog.
//! * [`PlatformCapabilities`] tells if the session has more than one [`MapProvider`]. Only then
//!   the provider toggle is shown and the catalog is filtered.
//! * [`ShowcaseApp`](app::ShowcaseApp) is the `egui` front-end rendering the catalog and the map
//!   with `galileo-egui`.
//!
//! ```no_run
//! use galileo_showcase::catalog::registry::default_catalog;
//! use galileo_showcase::{ExampleCatalogController, PlatformCapabilities};
//!
//! let mut controller =
//!     ExampleCatalogController::new(default_catalog()?, PlatformCapabilities::multi_provider());
//! controller.set_provider_toggle(true);
//!
//! for entry in controller.visible_entries() {
//!     println!("{}", entry.title);
//! }
//! # Ok::<(), galileo_showcase::error::ShowcaseError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod provider;
pub mod screen;

pub use catalog::registry::ExampleScreen;
pub use catalog::{Catalog, CatalogEntry, VisibleEntry};
pub use config::ShowcaseConfig;
pub use controller::{CatalogState, ExampleCatalogController, ScreenFactory, View};
pub use provider::{MapProvider, PlatformCapabilities};
