//! Document configuration.
//!
//! Controls the parts of the README that don't come from project records:
//! the header above the projects, the table of contents and the footer.
//! Loaded from `showcase.toml` in the same folder as the README, merged on
//! top of stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [header]
//! title = "Projects"
//! logo = ""                    # Path or URL of a collection logo; empty = none
//! logo_height = 120
//! about_heading = "About this Repository"
//! about = ""                   # Paragraph under the title; empty = none
//! homepage_label = ""          # Badge text for a homepage link
//! homepage_url = ""            # Both label and url, or neither
//!
//! [toc]
//! enabled = true
//! heading = "📋 Contents"
//!
//! [footer]
//! date_format = "%B %d, %Y"    # strftime pattern for "Last updated"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [header]
//! title = "Acme Labs Portfolio"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up next to the README.
pub const CONFIG_FILENAME: &str = "showcase.toml";

pub const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Document configuration loaded from `showcase.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentConfig {
    /// Front matter above the projects.
    pub header: HeaderConfig,
    /// Table of contents.
    pub toc: TocConfig,
    /// Footer stamp.
    pub footer: FooterConfig,
}

impl DocumentConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "header.title must not be empty".into(),
            ));
        }
        if self.header.logo_height == 0 {
            return Err(ConfigError::Validation(
                "header.logo_height must be positive".into(),
            ));
        }
        if self.header.homepage_url.is_empty() != self.header.homepage_label.is_empty() {
            return Err(ConfigError::Validation(
                "header.homepage_label and header.homepage_url must be set together".into(),
            ));
        }
        if self.toc.heading.trim().is_empty() {
            return Err(ConfigError::Validation(
                "toc.heading must not be empty".into(),
            ));
        }
        let pattern = &self.footer.date_format;
        if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "footer.date_format is not a valid strftime pattern: {pattern:?}"
            )));
        }
        Ok(())
    }
}

/// Front matter settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeaderConfig {
    /// Level-1 heading of the README.
    pub title: String,
    /// Collection logo shown above the title. Empty for none.
    pub logo: String,
    /// Logo height in pixels.
    pub logo_height: u32,
    /// Level-3 heading above the about paragraph.
    pub about_heading: String,
    /// Paragraph under the title. Empty for none.
    pub about: String,
    /// Text of the homepage badge.
    pub homepage_label: String,
    /// Target of the homepage badge. Empty for none.
    pub homepage_url: String,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            title: "Projects".to_string(),
            logo: String::new(),
            logo_height: 120,
            about_heading: "About this Repository".to_string(),
            about: String::new(),
            homepage_label: String::new(),
            homepage_url: String::new(),
        }
    }
}

/// Table of contents settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TocConfig {
    pub enabled: bool,
    pub heading: String,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            heading: "📋 Contents".to_string(),
        }
    }
}

/// Footer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// strftime pattern for the "Last updated" date.
    pub date_format: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(DocumentConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `showcase.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file doesn't exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<DocumentConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: DocumentConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config that applies to documents in `dir`.
pub fn load_config(dir: &Path) -> Result<DocumentConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `showcase.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase README Configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file next to the README it describes. Unknown keys are an error.

# ---------------------------------------------------------------------------
# Header shown above the projects
# ---------------------------------------------------------------------------
[header]
# Level-1 heading of the README.
title = "Projects"

# Path or URL of a collection logo shown above the title. Empty = no logo.
logo = ""
logo_height = 120

# Optional "about" paragraph under the title, with its own heading.
about_heading = "About this Repository"
about = ""

# Optional homepage badge. Set both or neither.
homepage_label = ""
homepage_url = ""

# ---------------------------------------------------------------------------
# Table of contents
# ---------------------------------------------------------------------------
[toc]
enabled = true
heading = "📋 Contents"

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# strftime pattern for the "Last updated" stamp.
date_format = "%B %d, %Y"
"##
}
