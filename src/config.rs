//! Configuration module.
//!
//! Handles loading, validating, and merging an optional `config.toml`. Stock
//! defaults are serialized to TOML, the user's file is merged on top, and the
//! result is deserialized and validated.
//!
//! ## Config File Location
//!
//! `config.toml` is read from the config directory (`--config-dir`, default
//! the current directory). A missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [export]
//! format = "separate-images"  # or "pdf" to also write photocards.pdf
//!
//! [pdf]
//! dpi = 72.0                  # pixels per inch when sizing PDF pages
//! ```
//!
//! Frame geometry (canvas sizes, border widths, border color) is fixed and
//! deliberately absent from this file.
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! [export]
//! format = "pdf"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::process::ExportMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `config.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramerConfig {
    /// Export settings (default mode).
    pub export: ExportConfig,
    /// Aggregate document settings.
    pub pdf: PdfConfig,
}

impl FramerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pdf.dpi.is_finite() && self.pdf.dpi > 0.0) {
            return Err(ConfigError::Validation(
                "pdf.dpi must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

/// Export settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Default export mode when the command line does not choose one.
    pub format: ExportMode,
}

/// Aggregate document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PdfConfig {
    /// Pixels per inch. At 72, one pixel is one PDF point.
    pub dpi: f32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { dpi: 72.0 }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged onto.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(FramerConfig::default()).expect("default config must serialize")
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the directory has no `config.toml`.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
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
) -> Result<FramerConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: FramerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
pub fn load_config(dir: &Path) -> Result<FramerConfig, ConfigError> {
    resolve_config(stock_defaults_value(), load_raw_config(dir)?)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r#"# photocard configuration
# =======================
#
# Place this file as config.toml in the directory passed to --config-dir
# (default: the current directory). Every key is optional.

[export]
# Default export mode: "separate-images" writes one PNG per photo,
# "pdf" additionally writes photocards.pdf with one page per photo.
# The --format flag overrides this.
format = "separate-images"

[pdf]
# Resolution used to size PDF pages. At 72 dpi a 1000x750 card becomes a
# 1000x750 pt page; at 300 dpi it prints at 3.33x2.5 inches.
dpi = 72.0
"#
}
