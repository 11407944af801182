//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::catalog::{CatalogItem, seed_catalog};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub products: Vec<CatalogItem>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub title: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_TITLE: &str = "Inventory";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub title: String,
    pub products: Vec<CatalogItem>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `explicit` if given, else from `~/.storefront/config.toml`.
///
/// A missing explicit file is an `Io` error. A missing default file is
/// generated (commented out) and `StorefrontConfig::default()` is returned.
/// A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<StorefrontConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StorefrontConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StorefrontConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<StorefrontConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: StorefrontConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Storefront Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# title = "Inventory"                 # Or set STOREFRONT_TITLE env var

# Products replace the built-in catalog when at least one is listed.
# Display order follows file order.
#
# [[products]]
# sku = "NICEHAT"
# name = "A Nice Black Hat"
# image_url = "/resources/images/products/black-hat.jpg"
# department = ["Men", "Accessories", "Hats"]
# price = 29.99
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_title` is from the CLI flag (None = not specified).
pub fn resolve(config: &StorefrontConfig, cli_title: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_title, std::env::var("STOREFRONT_TITLE").ok())
}

fn resolve_with_env(
    config: &StorefrontConfig,
    cli_title: Option<&str>,
    env_title: Option<String>,
) -> ResolvedConfig {
    // Title: CLI → env → config → default
    let title = cli_title
        .map(|s| s.to_string())
        .or(env_title)
        .or_else(|| config.general.title.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let products = if config.products.is_empty() {
        seed_catalog()
    } else {
        info!("Using {} configured products", config.products.len());
        config.products.clone()
    };

    ResolvedConfig { title, products }
}
