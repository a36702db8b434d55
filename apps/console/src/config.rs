//! # Console Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPFRONT_STORE_NAME="Corner Shop"                                 │
//! │     SHOPFRONT_AUDIT_LOG=/var/log/shopfront/log.txt                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $SHOPFRONT_CONFIG, or                                              │
//! │     ~/.config/shopfront/shopfront.toml (Linux)                         │
//! │     ~/Library/Application Support/com.shopfront.shopfront/... (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     store_name = "Shopfront", audit_log_path = "log.txt"               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shopfront.toml
//! store_name = "Corner Shop"
//! audit_log_path = "log.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use shopfront_core::validation::validate_required;

use crate::error::ConsoleResult;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Shown in the welcome line.
    pub store_name: String,

    /// Where completed checkouts are appended.
    pub audit_log_path: PathBuf,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: "Shopfront".to_string(),
            audit_log_path: PathBuf::from("log.txt"),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `SHOPFRONT_CONFIG`, or platform default)
    /// 3. Environment variables
    ///
    /// A missing config file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> ConsoleResult<Self> {
        let path = config_path
            .or_else(|| std::env::var_os("SHOPFRONT_CONFIG").map(PathBuf::from))
            .or_else(Self::default_config_path);

        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Layers the file at `path` (if any) and the `lookup` overrides over
    /// the defaults, then validates.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> ConsoleResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; absent keys keep their defaults.
    pub fn from_toml(contents: &str) -> ConsoleResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `SHOPFRONT_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("SHOPFRONT_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(path) = lookup("SHOPFRONT_AUDIT_LOG") {
            debug!(path = %path, "Overriding audit log path from environment");
            self.audit_log_path = PathBuf::from(path);
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConsoleResult<()> {
        validate_required("store_name", &self.store_name)?;
        validate_required("audit_log_path", &self.audit_log_path.to_string_lossy())?;
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopfront", "shopfront")
            .map(|dirs| dirs.config_dir().join("shopfront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConsoleError;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::default();
        assert_eq!(config.store_name, "Shopfront");
        assert_eq!(config.audit_log_path, PathBuf::from("log.txt"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ConsoleConfig::from_toml("store_name = \"Corner Shop\"").unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.audit_log_path, PathBuf::from("log.txt"));
    }

    #[test]
    fn test_from_toml_malformed() {
        let err = ConsoleConfig::from_toml("store_name = ").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("SHOPFRONT_STORE_NAME", "Night Market"),
            ("SHOPFRONT_AUDIT_LOG", "/tmp/audit.txt"),
        ]
        .into_iter()
        .collect();

        let mut config = ConsoleConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.audit_log_path, PathBuf::from("/tmp/audit.txt"));
    }

    #[test]
    fn test_validate_rejects_blank_values() {
        let config = ConsoleConfig {
            store_name: "  ".to_string(),
            ..ConsoleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConsoleError::Validation(_))));

        let config = ConsoleConfig {
            audit_log_path: PathBuf::new(),
            ..ConsoleConfig::default()
        };
        assert!(config.validate().is_err());
    }

    fn write_config(dir: &tempfile::TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("shopfront.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "audit_log_path = \"orders.log\"\n");

        let config = ConsoleConfig::load_from(Some(path.as_path()), |_| None).unwrap();
        assert_eq!(config.audit_log_path, PathBuf::from("orders.log"));
        assert_eq!(config.store_name, "Shopfront");
    }

    #[test]
    fn test_environment_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "store_name = \"Corner Shop\"\naudit_log_path = \"orders.log\"\n",
        );

        let config = ConsoleConfig::load_from(Some(path.as_path()), |key| {
            (key == "SHOPFRONT_STORE_NAME").then(|| "Night Market".to_string())
        })
        .unwrap();
        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.audit_log_path, PathBuf::from("orders.log"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let config = ConsoleConfig::load_from(Some(path.as_path()), |_| None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_load_from_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "store_name = [\n");

        assert!(matches!(
            ConsoleConfig::load_from(Some(path.as_path()), |_| None),
            Err(ConsoleError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_rejects_blank_override() {
        let err = ConsoleConfig::load_from(None, |key| {
            (key == "SHOPFRONT_STORE_NAME").then(|| " ".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConsoleError::Validation(_)));
    }
}
