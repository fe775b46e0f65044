//! High-level image operations.
//!
//! These functions combine tier naming with backend execution. They take
//! configuration, compute parameters, and call the backend.

use super::backend::{BackendError, ImageBackend};
use super::params::{Quality, ResizeParams};
use crate::config::TiersConfig;
use crate::naming::tier_output_path;
use crate::types::{Tier, TierSize};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<(u32, u32)> {
    let dims = backend.identify(path)?;
    Ok((dims.width, dims.height))
}

/// A tier file written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedVariant {
    pub tier: Tier,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Configuration for tier generation.
#[derive(Debug, Clone)]
pub struct TierConfig {
    pub tiers: Vec<(Tier, TierSize)>,
    pub quality: Quality,
}

impl Default for TierConfig {
    fn default() -> Self {
        Self {
            tiers: TiersConfig::default().iter().collect(),
            quality: Quality::default(),
        }
    }
}

/// Plan the resize operations for one source without executing them.
///
/// Output paths follow `<output_root>/<tier>/<base_name>_<tier><extension>`.
pub fn plan_tier_variants(
    source: &Path,
    output_root: &Path,
    base_name: &str,
    extension: &str,
    config: &TierConfig,
) -> Vec<(Tier, ResizeParams)> {
    config
        .tiers
        .iter()
        .map(|&(tier, size)| {
            (
                tier,
                ResizeParams {
                    source: source.to_path_buf(),
                    output: tier_output_path(output_root, base_name, tier, extension),
                    width: size.width,
                    height: size.height,
                    quality: config.quality,
                },
            )
        })
        .collect()
}

/// Resize one source into every configured tier.
///
/// `on_saved` is called after each file is written, so a failure on a later
/// tier still reports the tiers that made it to disk.
pub fn create_tier_variants(
    backend: &impl ImageBackend,
    source: &Path,
    output_root: &Path,
    base_name: &str,
    extension: &str,
    config: &TierConfig,
    mut on_saved: impl FnMut(&GeneratedVariant),
) -> Result<Vec<GeneratedVariant>> {
    let mut variants = Vec::new();

    for (tier, params) in plan_tier_variants(source, output_root, base_name, extension, config) {
        backend.resize(&params)?;

        let variant = GeneratedVariant {
            tier,
            path: params.output,
            width: params.width,
            height: params.height,
        };
        on_saved(&variant);
        variants.push(variant);
    }

    Ok(variants)
}
