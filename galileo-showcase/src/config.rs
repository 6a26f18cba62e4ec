//! Application configuration.
//!
//! Configuration is read from a JSON file named by the `GALILEO_SHOWCASE_CONFIG` environment
//! variable. Any field can be omitted. The `VT_API_KEY` environment variable overrides the API key
//! of the alternate provider.
//!
//! ```json
//! {
//!     "multi_provider": true,
//!     "alternate": { "style": "winter-v2", "api_key": "..." },
//!     "tile_cache": ".tile_cache",
//!     "start": { "lat": 37.566, "lon": 126.9784, "z_level": 8 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ShowcaseError;
use crate::screen::{Camera, MAX_Z_LEVEL};

/// Environment variable with the path to the configuration file.
pub const CONFIG_PATH_VAR: &str = "GALILEO_SHOWCASE_CONFIG";
/// Environment variable with the API key of the alternate provider.
pub const API_KEY_VAR: &str = "VT_API_KEY";

const DEFAULT_TILE_CACHE: &str = ".tile_cache";

/// Settings of the alternate tile provider.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlternateProviderConfig {
    /// Root URL of the tile service.
    pub base_url: String,
    /// Map style used for examples that don't request a specific one.
    pub style: String,
    /// API key appended to every tile request.
    pub api_key: Option<String>,
}

impl Default for AlternateProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.maptiler.com".to_string(),
            style: "streets-v2".to_string(),
            api_key: None,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Forces the provider toggle on or off. If not set, the toggle is available when the
    /// alternate provider has an API key.
    pub multi_provider: Option<bool>,
    /// Alternate provider settings.
    pub alternate: AlternateProviderConfig,
    /// Folder for the tile file cache. Defaults to `.tile_cache`.
    pub tile_cache: Option<PathBuf>,
    /// Map position shown before any example is opened.
    pub start: Camera,
}

impl ShowcaseConfig {
    /// Loads configuration from the file given by [`CONFIG_PATH_VAR`] (or defaults if the variable
    /// is not set), applies the [`API_KEY_VAR`] override and validates the result.
    pub fn load() -> Result<Self, ShowcaseError> {
        let config = match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        let config = config.with_api_key_override(std::env::var(API_KEY_VAR).ok());
        config.validate()?;

        Ok(config)
    }

    /// Reads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ShowcaseError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(contents: &str) -> Result<Self, ShowcaseError> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Replaces the alternate provider API key if `api_key` is set.
    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if api_key.is_some() {
            self.alternate.api_key = api_key;
        }

        self
    }

    /// Checks values that cannot be expressed by the types alone.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        if self.alternate.base_url.trim().is_empty() {
            return Err(ShowcaseError::Config(
                "alternate provider base url is empty".to_string(),
            ));
        }

        if self.alternate.style.trim().is_empty() {
            return Err(ShowcaseError::Config(
                "alternate provider style is empty".to_string(),
            ));
        }

        if matches!(&self.alternate.api_key, Some(key) if key.trim().is_empty()) {
            return Err(ShowcaseError::Config(
                "alternate provider api key is empty".to_string(),
            ));
        }

        if self.start.z_level > MAX_Z_LEVEL {
            return Err(ShowcaseError::Config(format!(
                "start zoom level {} is above {MAX_Z_LEVEL}",
                self.start.z_level
            )));
        }

        Ok(())
    }

    /// Folder used for the tile file cache.
    pub fn tile_cache_path(&self) -> &Path {
        self.tile_cache
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_TILE_CACHE))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use insta::assert_compact_debug_snapshot;

    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = ShowcaseConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ShowcaseConfig::default());
        assert_eq!(config.tile_cache_path(), Path::new(".tile_cache"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let config = ShowcaseConfig::from_json_str(
            r#"{
                "multi_provider": true,
                "alternate": { "api_key": "abc" },
                "tile_cache": "target/tiles",
                "start": { "lat": 10.0, "lon": 20.0, "z_level": 3 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.multi_provider, Some(true));
        assert_eq!(config.alternate.api_key.as_deref(), Some("abc"));
        assert_eq!(config.alternate.style, "streets-v2");
        assert_eq!(config.tile_cache_path(), Path::new("target/tiles"));
        assert_eq!(config.start, Camera::new(10.0, 20.0, 3));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = ShowcaseConfig::from_json_str(r#"{ "multi_provider": "yes" }"#);
        assert_matches!(result, Err(ShowcaseError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = ShowcaseConfig::from_file("target/no_such_showcase_config.json");
        assert_matches!(result, Err(ShowcaseError::FsIo(_)));
    }

    #[test]
    fn api_key_override() {
        let config = ShowcaseConfig::default().with_api_key_override(Some("env".to_string()));
        assert_eq!(config.alternate.api_key.as_deref(), Some("env"));

        let config = config.with_api_key_override(None);
        assert_eq!(config.alternate.api_key.as_deref(), Some("env"));
    }

    #[test]
    fn validate_rejects_empty_api_key() {
        let config = ShowcaseConfig::default().with_api_key_override(Some("  ".to_string()));
        assert_compact_debug_snapshot!(config.validate(), @r#"Err(Config("alternate provider api key is empty"))"#);
    }

    #[test]
    fn validate_rejects_deep_zoom() {
        let mut config = ShowcaseConfig::default();
        config.start.z_level = 30;
        assert_compact_debug_snapshot!(config.validate(), @r#"Err(Config("start zoom level 30 is above 22"))"#);
    }
}
