//! Configuration management trait.
//!
//! [`ConfigManager`] gives any serde-backed configuration struct a TOML file
//! location, loading with environment overrides, and export as environment
//! variables. The CLI config subcommands are written against this trait.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Error, Result};

/// A TOML-backed configuration type.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name, used for the config directory and environment prefix.
    fn project_name() -> &'static str;

    /// Environment variable prefix derived from the project name.
    ///
    /// "folio" → "FOLIO", "my-site" → "MY_SITE".
    fn env_prefix() -> String {
        Self::project_name().to_uppercase().replace(['-', ' '], "_")
    }

    /// Platform default location: `<config dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// Resolve the config file path.
    ///
    /// Checks in order:
    /// 1. The explicit path, if given
    /// 2. `{PREFIX}_CONFIG` environment variable
    /// 3. [`default_config_path`](Self::default_config_path)
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(format!("{}_CONFIG", Self::env_prefix())) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Apply overrides from environment-like key lookups.
    ///
    /// The default implementation applies nothing.
    fn apply_env_overrides(&mut self, _lookup: &dyn Fn(&str) -> Option<String>) {}

    /// Export the configuration as `(NAME, value)` environment pairs.
    fn to_env_vars(&self) -> Result<Vec<(String, String)>>;

    /// Load configuration from a TOML string, without environment overrides.
    fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Load configuration.
    ///
    /// An explicit path that does not exist is an error. A resolved default
    /// path that does not exist yields [`Default`] values. Environment
    /// overrides are applied last.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let mut config = match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                let content =
                    std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
                toml::from_str(&content).map_err(|e| {
                    Error::config(format!("Failed to parse {}: {e}", path.display()))
                })?
            }
            Some(path) if explicit.is_some() => {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            _ => {
                log::debug!("No config file found, using defaults");
                Self::default()
            }
        };

        config.apply_env_overrides(&|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
    #[serde(default)]
    struct SiteConfig {
        title: String,
        port: u16,
    }

    impl ConfigManager for SiteConfig {
        fn project_name() -> &'static str {
            "my-site"
        }

        fn apply_env_overrides(&mut self, lookup: &dyn Fn(&str) -> Option<String>) {
            if let Some(title) = lookup("MY_SITE_TITLE") {
                self.title = title;
            }
        }

        fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
            Ok(vec![("MY_SITE_TITLE".to_string(), self.title.clone())])
        }
    }

    #[test]
    fn test_env_prefix() {
        assert_eq!(SiteConfig::env_prefix(), "MY_SITE");
    }

    #[test]
    fn test_resolve_explicit_path() {
        let path = SiteConfig::resolve_config_path(Some("/explicit/config.toml"));
        assert_eq!(path, Some(PathBuf::from("/explicit/config.toml")));
    }

    #[test]
    fn test_load_explicit_missing_is_error() {
        let result = SiteConfig::load(Some("/nonexistent/folio/config.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = \"Portfolio\"\nport = 8080\n").unwrap();

        let config = SiteConfig::load(Some(path.to_str().unwrap())).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "title = [unclosed").unwrap();

        let result = SiteConfig::load(Some(path.to_str().unwrap()));
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_apply_env_overrides() {
        let mut config = SiteConfig::default();
        config.apply_env_overrides(&|key| (key == "MY_SITE_TITLE").then(|| "Env".to_string()));
        assert_eq!(config.title, "Env");
    }

    #[test]
    fn test_toml_string_roundtrips_through_from_toml_str() {
        let config = SiteConfig {
            title: "Portfolio".to_string(),
            port: 3000,
        };
        let text = config.to_toml_string().unwrap();
        assert_eq!(SiteConfig::from_toml_str(&text).unwrap(), config);
    }
}
