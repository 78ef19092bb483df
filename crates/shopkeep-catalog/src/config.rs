//! # Shop Configuration
//!
//! Settings for the catalog locale and record input files.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPKEEP_LOCALE=fr-FR                                              │
//! │     SHOPKEEP_PRODUCTS=data/products.csv                                │
//! │     SHOPKEEP_REVIEWS=data/reviews.csv                                  │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/shop/shop.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.shopkeep.shop/shop.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     locale = en-GB, no input files                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # shop.toml
//! [catalog]
//! locale = "en-GB"
//!
//! [input]
//! products = "data/products.csv"
//! reviews = "data/reviews.csv"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CatalogError, CatalogResult};
use crate::format::DEFAULT_LOCALE;

pub const ENV_LOCALE: &str = "SHOPKEEP_LOCALE";
pub const ENV_PRODUCTS: &str = "SHOPKEEP_PRODUCTS";
pub const ENV_REVIEWS: &str = "SHOPKEEP_REVIEWS";

// =============================================================================
// Sections
// =============================================================================

/// `[catalog]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Locale tag for reports, e.g. `"fr-FR"`.
    #[serde(default = "default_locale")]
    pub locale: String,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            locale: default_locale(),
        }
    }
}

/// `[input]` section. Both files are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Product records, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<PathBuf>,

    /// Review records, one per line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<PathBuf>,
}

impl InputSettings {
    /// True when at least one record file is configured.
    pub fn has_files(&self) -> bool {
        self.products.is_some() || self.reviews.is_some()
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete shop configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub input: InputSettings,
}

impl ShopConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, or `shop.toml` in the platform
    ///    config directory)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> CatalogResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading shop config from file");
                config = Self::from_file(&path)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load shop config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Reads one TOML file with no environment overrides.
    pub fn from_file(path: &Path) -> CatalogResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn validate(&self) -> CatalogResult<()> {
        if self.catalog.locale.trim().is_empty() {
            return Err(CatalogError::Config("catalog.locale must not be empty".into()));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup, in environment variable terms.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(locale) = lookup(ENV_LOCALE) {
            debug!(locale = %locale, "Overriding locale from environment");
            self.catalog.locale = locale;
        }

        if let Some(products) = lookup(ENV_PRODUCTS) {
            debug!(products = %products, "Overriding products file from environment");
            self.input.products = Some(PathBuf::from(products));
        }

        if let Some(reviews) = lookup(ENV_REVIEWS) {
            debug!(reviews = %reviews, "Overriding reviews file from environment");
            self.input.reviews = Some(PathBuf::from(reviews));
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "shopkeep", "shop")
            .map(|dirs| dirs.config_dir().join("shop.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn locale(&self) -> &str {
        &self.catalog.locale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = ShopConfig::new();
        assert_eq!(config.locale(), "en-GB");
        assert!(!config.input.has_files());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = ShopConfig::default();
        config.catalog.locale = "   ".to_string();
        assert!(matches!(config.validate(), Err(CatalogError::Config(_))));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ShopConfig = toml::from_str("[input]\nproducts = \"p.csv\"\n").unwrap();
        assert_eq!(config.locale(), "en-GB");
        assert_eq!(config.input.products, Some(PathBuf::from("p.csv")));
        assert_eq!(config.input.reviews, None);
        assert!(config.input.has_files());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [(ENV_LOCALE, "fr-FR"), (ENV_REVIEWS, "r.csv")]
            .into_iter()
            .collect();

        let mut config = ShopConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.locale(), "fr-FR");
        assert_eq!(config.input.products, None);
        assert_eq!(config.input.reviews, Some(PathBuf::from("r.csv")));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(
            &path,
            "[catalog]\nlocale = \"zh-CN\"\n\n[input]\nproducts = \"products.csv\"\n",
        )
        .unwrap();

        let config = ShopConfig::from_file(&path).unwrap();
        assert_eq!(config.locale(), "zh-CN");
        assert_eq!(config.input.products, Some(PathBuf::from("products.csv")));
        assert_eq!(config.input.reviews, None);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shop.toml");
        std::fs::write(&path, "[catalog\nlocale = ").unwrap();

        let err = ShopConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CatalogError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShopConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ShopConfig::default()).unwrap();
        assert!(toml_str.contains("[catalog]"));
        assert!(toml_str.contains("locale = \"en-GB\""));
    }
}
