use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Environment variable that overrides `asset_root`
pub const ASSETS_ENV: &str = "MEMORY_GALLERY_ASSETS";

/// User configuration, read from `config.json`
///
/// Every field has a default, so a partial file is valid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory the photo sources ("/images/1.jpg", ...) are resolved against
    pub asset_root: PathBuf,
    /// Reveal the gallery as soon as the window opens
    pub activate_on_start: bool,
    pub dark_theme: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public"),
            activate_on_start: true,
            dark_theme: true,
        }
    }
}

impl Config {
    /// Load the user's config, falling back to defaults.
    ///
    /// The file is looked up in the platform config directory:
    /// - Linux: ~/.config/memory-gallery/config.json
    /// - macOS: ~/Library/Application Support/memory-gallery/config.json
    /// - Windows: %APPDATA%\memory-gallery\config.json
    pub fn load() -> Self {
        let config = match Self::config_path() {
            Some(path) => match Self::load_from(&path) {
                Ok(Some(config)) => {
                    tracing::info!(path = %path.display(), "loaded configuration");
                    config
                }
                Ok(None) => Self::default(),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "ignoring configuration file");
                    Self::default()
                }
            },
            None => Self::default(),
        };

        config.with_asset_override(std::env::var_os(ASSETS_ENV))
    }

    /// Get the path where the config file should live
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;

        path.push("memory-gallery");
        path.push("config.json");
        Some(path)
    }

    /// Read a config file. A missing file is `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        Self::from_json(&json).map(Some)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace `asset_root` when the override is set and non-empty
    pub fn with_asset_override(mut self, value: Option<OsString>) -> Self {
        if let Some(root) = value.filter(|v| !v.is_empty()) {
            self.asset_root = PathBuf::from(root);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_json(r#"{ "dark_theme": false }"#).unwrap();

        assert!(!config.dark_theme);
        assert!(config.activate_on_start);
        assert_eq!(config.asset_root, PathBuf::from("public"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("config.json")).unwrap();

        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "asset_root": "/srv/photos", "activate_on_start": false }"#)
            .unwrap();

        let config = Config::load_from(&path).unwrap().unwrap();
        assert_eq!(config.asset_root, PathBuf::from("/srv/photos"));
        assert!(!config.activate_on_start);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_asset_override() {
        let config = Config::default().with_asset_override(Some("/tmp/pics".into()));
        assert_eq!(config.asset_root, PathBuf::from("/tmp/pics"));

        let config = Config::default().with_asset_override(Some(OsString::new()));
        assert_eq!(config.asset_root, PathBuf::from("public"));

        let config = Config::default().with_asset_override(None);
        assert_eq!(config, Config::default());
    }
}
