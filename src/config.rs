//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the base directory.
//! Everything is optional — a missing file yields the stock defaults, and a
//! present file only needs to specify the values it wants to override.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! site_name = "ديوان الانفراد"       # Brand shown in the navbar and footer
//! contact_email = "info@infiradeng.com"
//! data_dir = "data"                  # JSON collections live here
//! pages_dir = "."                    # Generated HTML pages land here
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Platform brand, shown in the navbar, page titles, and footer.
    pub site_name: String,
    /// Contact address shown in the footer.
    pub contact_email: String,
    /// Directory (relative to the base dir) holding the JSON collections.
    pub data_dir: String,
    /// Directory (relative to the base dir) where HTML pages are written.
    pub pages_dir: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            site_name: "ديوان الانفراد".to_string(),
            contact_email: "info@infiradeng.com".to_string(),
            data_dir: "data".to_string(),
            pages_dir: ".".to_string(),
        }
    }
}

/// Load `config.toml` from the base directory, falling back to defaults
/// when the file does not exist.
pub fn load_config(base_dir: &Path) -> Result<SiteConfig, ConfigError> {
    let path = base_dir.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    let content = fs::read_to_string(&path)?;
    Ok(toml::from_str(&content)?)
}

/// A documented stock config, printed by `diwan gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# Diwan site configuration
# All options are optional - defaults shown below.

# Brand shown in the navbar, page titles, and footer
site_name = "ديوان الانفراد"

# Contact address shown in the footer
contact_email = "info@infiradeng.com"

# Directory holding the JSON collections (terms.json, articles.json)
data_dir = "data"

# Directory where generated HTML pages are written
pages_dir = "."
"#
}
