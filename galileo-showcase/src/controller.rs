//! Navigation between the catalog and example screens.
//!
//! [`ExampleCatalogController`] owns the static [`Catalog`] and the mutable session state: which
//! example is open and whether the alternate provider is switched on. Everything the UI displays
//! is derived from these on demand, so there is nothing to invalidate when the state changes.

use std::fmt::Debug;

use crate::catalog::{Catalog, CatalogEntry, VisibleEntry};
use crate::provider::{MapProvider, PlatformCapabilities};

/// Creates example screens when the user opens them.
pub trait ScreenFactory<S> {
    /// Sets up `screen` to show the map of the given `provider`.
    fn instantiate(&mut self, screen: S, provider: MapProvider);
}

/// What the application currently shows.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View<S> {
    /// List of examples.
    Catalog,
    /// The given example screen.
    Example(S),
}

/// Session state of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState<S> {
    active: Option<S>,
    provider_toggle: bool,
}

impl<S> CatalogState<S> {
    /// Initial state: the catalog view with the platform default toggle value.
    pub fn new(capabilities: PlatformCapabilities) -> Self {
        Self {
            active: None,
            provider_toggle: capabilities.default_provider_toggle(),
        }
    }
}

/// Controls which example is shown and with which provider.
#[derive(Debug)]
pub struct ExampleCatalogController<S> {
    catalog: Catalog<S>,
    capabilities: PlatformCapabilities,
    state: CatalogState<S>,
}

impl<S: Copy + PartialEq + Debug> ExampleCatalogController<S> {
    /// Creates a controller in the catalog view.
    pub fn new(catalog: Catalog<S>, capabilities: PlatformCapabilities) -> Self {
        let state = CatalogState::new(capabilities);
        log::info!(
            "Catalog with {} examples, multiple providers: {}",
            catalog.len(),
            capabilities.has_multiple_providers()
        );

        Self {
            catalog,
            capabilities,
            state,
        }
    }

    /// Opens the visible example with the given title and lets the `factory` set it up.
    ///
    /// Does nothing if an example is already open, or if no visible entry has this title.
    pub fn select_example(&mut self, title: &str, factory: &mut impl ScreenFactory<S>) {
        if let Some(active) = self.state.active {
            log::debug!("Ignoring selection of '{title}' while {active:?} is open");
            return;
        }

        let Some(entry) = self
            .catalog
            .find(title)
            .filter(|entry| self.is_visible(entry))
        else {
            log::debug!("Ignoring selection of '{title}': no such visible example");
            return;
        };

        let screen = *entry.screen();
        let provider = self.provider();
        log::debug!("Opening example {screen:?} with {provider} tiles");

        self.state.active = Some(screen);
        factory.instantiate(screen, provider);
    }

    /// Closes the open example and returns to the catalog.
    pub fn go_back(&mut self) {
        if let Some(active) = self.state.active.take() {
            log::debug!("Closing example {active:?}");
        }
    }

    /// Sets the provider toggle.
    ///
    /// The value is stored in any session, but only affects the catalog and the provider when
    /// multiple providers are available.
    pub fn set_provider_toggle(&mut self, value: bool) {
        if self.state.provider_toggle != value {
            self.state.provider_toggle = value;
            log::info!("Provider toggle set to {value}, using {}", self.provider());
        }
    }

    /// Entries the user can choose from, in catalog order.
    pub fn visible_entries(&self) -> Vec<VisibleEntry<'_, S>> {
        let use_labels = self.alternate_active();
        self.catalog
            .iter()
            .filter(|entry| self.is_visible(entry))
            .map(|entry| VisibleEntry {
                title: if use_labels {
                    entry.labeled_title()
                } else {
                    entry.title().into()
                },
                key: entry.title(),
                screen: *entry.screen(),
            })
            .collect()
    }

    /// Provider given to the examples opened in the current state.
    pub fn provider(&self) -> MapProvider {
        if self.alternate_active() {
            MapProvider::Alternate
        } else {
            MapProvider::Default
        }
    }

    /// Current view.
    pub fn view(&self) -> View<S> {
        match self.state.active {
            Some(screen) => View::Example(screen),
            None => View::Catalog,
        }
    }

    /// Catalog entry of the open example.
    pub fn active_entry(&self) -> Option<&CatalogEntry<S>> {
        let active = self.state.active?;
        self.catalog.iter().find(|entry| *entry.screen() == active)
    }

    /// Current value of the provider toggle.
    pub fn provider_toggle(&self) -> bool {
        self.state.provider_toggle
    }

    /// Capabilities the controller was created with.
    pub fn capabilities(&self) -> PlatformCapabilities {
        self.capabilities
    }

    /// Session state.
    pub fn state(&self) -> &CatalogState<S> {
        &self.state
    }

    /// The full catalog, including entries filtered out by the current state.
    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    fn alternate_active(&self) -> bool {
        self.capabilities.has_multiple_providers() && self.state.provider_toggle
    }

    fn is_visible(&self, entry: &CatalogEntry<S>) -> bool {
        !self.capabilities.has_multiple_providers()
            || entry.is_alternate_compatible()
            || !self.state.provider_toggle
    }
}
