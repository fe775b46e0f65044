//! Pipeline configuration.
//!
//! Stock defaults reproduce the fixed tiers (1024×512, 2048×1024, 4096×2048)
//! and quality 85. An optional `config.toml` in the source directory can
//! override any of them; input and output paths are not configurable.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! quality = 85              # JPEG quality (1-100); PNG output ignores it
//!
//! [tiers.low]
//! width = 1024
//! height = 512
//!
//! [tiers.med]
//! width = 2048
//! height = 1024
//!
//! [tiers.high]
//! width = 4096
//! height = 2048
//! ```
//!
//! Config files are sparse: a file containing only `quality = 70` keeps all
//! three tier sizes. Unknown keys are rejected to catch typos early.

use crate::types::{Tier, TierSize};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file inside the source directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Settings for a resize run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Lossy encoding quality applied to every output.
    pub quality: u32,
    /// Target dimensions per tier.
    pub tiers: TiersConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quality: 85,
            tiers: TiersConfig::default(),
        }
    }
}

impl PipelineConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.quality) {
            return Err(ConfigError::Validation("quality must be 1-100".into()));
        }
        for tier in Tier::ALL {
            let size = self.tiers.size(tier);
            if size.width == 0 || size.height == 0 {
                return Err(ConfigError::Validation(format!(
                    "tiers.{tier} dimensions must be non-zero"
                )));
            }
        }
        Ok(())
    }
}

/// Target dimensions for each of the three tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiersConfig {
    pub low: TierSize,
    pub med: TierSize,
    pub high: TierSize,
}

impl Default for TiersConfig {
    fn default() -> Self {
        Self {
            low: TierSize::new(1024, 512),
            med: TierSize::new(2048, 1024),
            high: TierSize::new(4096, 2048),
        }
    }
}

impl TiersConfig {
    pub fn size(&self, tier: Tier) -> TierSize {
        match tier {
            Tier::Low => self.low,
            Tier::Med => self.med,
            Tier::High => self.high,
        }
    }

    /// Tiers paired with their sizes, in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, TierSize)> + '_ {
        Tier::ALL.into_iter().map(|tier| (tier, self.size(tier)))
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// Used as the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(PipelineConfig::default())?)
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
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.is_file() {
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
) -> Result<PipelineConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: PipelineConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the config for a source directory.
///
/// Merges `<dir>/config.toml` (if present) over the stock defaults, rejects
/// unknown keys, and validates the result.
pub fn load_config(dir: &Path) -> Result<PipelineConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# texture-tiers configuration
# ===========================
# Place this file at original_textures/config.toml.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Lossy encoding quality (1 = worst, 100 = best).
# Applies to JPEG outputs; PNG outputs are lossless and ignore it.
quality = 85

# ---------------------------------------------------------------------------
# Tier dimensions
# ---------------------------------------------------------------------------
# Every source image is stretched to exactly these dimensions. The aspect
# ratio of the source is not preserved.

# Fast load
[tiers.low]
width = 1024
height = 512

# Balanced
[tiers.med]
width = 2048
height = 1024

# Ultra zoom
[tiers.high]
width = 4096
height = 2048
"##
}
