//! Map tile providers and the platform capability that decides whether the user can choose
//! between them.

use std::fmt::{Display, Formatter};

use crate::config::ShowcaseConfig;

/// Backend that supplies the map tiles of an example screen.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MapProvider {
    /// OpenStreetMap tiles. Every example works with this provider.
    #[default]
    Default,
    /// REST tile service configured with an API key. Only examples marked as compatible are
    /// offered while this provider is active.
    Alternate,
}

impl Display for MapProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MapProvider::Default => write!(f, "OpenStreetMap"),
            MapProvider::Alternate => write!(f, "alternate tile service"),
        }
    }
}

/// Read-only facts about the running session, resolved once at startup.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlatformCapabilities {
    multi_provider: bool,
}

impl PlatformCapabilities {
    /// Capabilities of a session where only the default provider exists.
    pub fn single_provider() -> Self {
        Self {
            multi_provider: false,
        }
    }

    /// Capabilities of a session where the user can switch to the alternate provider.
    pub fn multi_provider() -> Self {
        Self {
            multi_provider: true,
        }
    }

    /// Resolves capabilities from the configuration.
    ///
    /// An explicit `multi_provider` value wins. Otherwise the alternate provider is available
    /// when an API key for it is configured.
    pub fn resolve(config: &ShowcaseConfig) -> Self {
        let multi_provider = config
            .multi_provider
            .unwrap_or_else(|| config.alternate.api_key.is_some());

        Self { multi_provider }
    }

    /// Whether the provider toggle and the compatibility filter are active.
    pub fn has_multiple_providers(&self) -> bool {
        self.multi_provider
    }

    /// Initial value of the provider toggle.
    ///
    /// The toggle starts switched on only in single-provider sessions, where its value is stored
    /// but never consulted.
    pub fn default_provider_toggle(&self) -> bool {
        !self.multi_provider
    }
}
