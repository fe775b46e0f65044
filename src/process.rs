//! Batch resizing into resolution tiers.
//!
//! Stage 2 of the pipeline. Takes the source images found by
//! [`scan`](crate::scan) and writes every one of them at every tier.
//!
//! ## Default Configuration
//!
//! ```text
//! low:  1024x512
//! med:  2048x1024
//! high: 4096x2048
//! Quality: 85 (JPEG; PNG is lossless)
//! ```
//!
//! ## Output Structure
//!
//! ```text
//! public/textures/
//! ├── low/
//! │   ├── earth_low.jpg
//! │   └── mars_low.png
//! ├── med/
//! │   ├── earth_med.jpg
//! │   └── mars_med.png
//! └── high/
//!     ├── earth_high.jpg
//!     └── mars_high.png
//! ```
//!
//! ## Failure behaviour
//!
//! Processing is sequential and stops at the first error. Files written
//! before the failure stay on disk; there is no rollback. Re-running
//! overwrites every output.

use crate::config::{self, ConfigError, PipelineConfig};
use crate::imaging::{
    BackendError, GeneratedVariant, ImageBackend, Quality, RustBackend, TierConfig,
    create_tier_variants, get_dimensions, plan_tier_variants,
};
use crate::scan::{self, ScanError, SourceImage};
use crate::types::{Tier, TierSize};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Image processing failed: {0}")]
    Imaging(#[from] BackendError),
}

/// Configuration for a processing run.
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub tiers: Vec<(Tier, TierSize)>,
    pub quality: u32,
}

impl ProcessConfig {
    /// Build a ProcessConfig from PipelineConfig values.
    pub fn from_pipeline_config(config: &PipelineConfig) -> Self {
        Self {
            tiers: config.tiers.iter().collect(),
            quality: config.quality,
        }
    }

    fn tier_config(&self) -> TierConfig {
        TierConfig {
            tiers: self.tiers.clone(),
            quality: Quality::new(self.quality),
        }
    }
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self::from_pipeline_config(&PipelineConfig::default())
    }
}

/// Progress events emitted while processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    /// A source image is about to be resized.
    ImageStarted {
        /// 1-based position in processing order.
        index: usize,
        file_name: String,
        dimensions: (u32, u32),
    },
    /// A tier file was written.
    Saved { tier: Tier, path: PathBuf },
    /// An image file was left out because its name is not valid UTF-8.
    Skipped { path: PathBuf },
}

/// A tier file produced by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputArtifact {
    pub source: PathBuf,
    pub tier: Tier,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Outcome of a successful run.
#[derive(Debug, Default)]
pub struct ProcessResult {
    /// Number of source images processed.
    pub images: usize,
    /// Every file written, in write order.
    pub outputs: Vec<OutputArtifact>,
    /// Image files that were not processed.
    pub skipped: Vec<PathBuf>,
}

/// Create `<output_root>/<tier>/` for every tier.
///
/// Idempotent: existing directories are left as they are.
pub fn ensure_tier_dirs(output_root: &Path, tiers: &[(Tier, TierSize)]) -> std::io::Result<()> {
    for (tier, _) in tiers {
        std::fs::create_dir_all(output_root.join(tier.name()))?;
    }
    Ok(())
}

/// Load the config from the source directory and process with the
/// production backend.
pub fn run(
    source_dir: &Path,
    output_dir: &Path,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let config = ProcessConfig::from_pipeline_config(&config::load_config(source_dir)?);
    process(source_dir, output_dir, &config, progress)
}

pub fn process(
    source_dir: &Path,
    output_dir: &Path,
    config: &ProcessConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, source_dir, output_dir, config, progress)
}

/// Process images using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    source_dir: &Path,
    output_dir: &Path,
    config: &ProcessConfig,
    progress: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    ensure_tier_dirs(output_dir, &config.tiers)?;
    let listing = scan::scan(source_dir)?;
    let tier_config = config.tier_config();

    let emit = |event: ProcessEvent| {
        if let Some(tx) = &progress {
            // A dropped receiver only loses console output.
            let _ = tx.send(event);
        }
    };

    for path in &listing.skipped {
        emit(ProcessEvent::Skipped { path: path.clone() });
    }

    let mut result = ProcessResult {
        skipped: listing.skipped.clone(),
        ..Default::default()
    };
    for (i, image) in listing.images.iter().enumerate() {
        emit(ProcessEvent::ImageStarted {
            index: i + 1,
            file_name: image.file_name(),
            dimensions: get_dimensions(backend, &image.path)?,
        });

        let variants = create_tier_variants(
            backend,
            &image.path,
            output_dir,
            &image.base_name,
            &image.extension,
            &tier_config,
            |variant| {
                emit(ProcessEvent::Saved {
                    tier: variant.tier,
                    path: variant.path.clone(),
                })
            },
        )?;

        result
            .outputs
            .extend(variants.into_iter().map(|v| to_artifact(image, v)));
        result.images += 1;
    }

    Ok(result)
}

/// A source image and the tier files a run would write for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedImage {
    pub file_name: String,
    pub dimensions: (u32, u32),
    pub outputs: Vec<PlannedOutput>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedOutput {
    pub tier: Tier,
    pub path: PathBuf,
    pub size: TierSize,
}

/// Everything a run would do, as reported by `check`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub images: Vec<PlannedImage>,
    /// Image files a run would leave out.
    pub skipped: Vec<PathBuf>,
}

/// Scan and identify without decoding or writing anything.
///
/// Used by the `check` command to show what a run would produce.
pub fn plan(
    source_dir: &Path,
    output_dir: &Path,
    config: &ProcessConfig,
) -> Result<Plan, ProcessError> {
    plan_with_backend(&RustBackend::new(), source_dir, output_dir, config)
}

pub fn plan_with_backend(
    backend: &impl ImageBackend,
    source_dir: &Path,
    output_dir: &Path,
    config: &ProcessConfig,
) -> Result<Plan, ProcessError> {
    let tier_config = config.tier_config();
    let listing = scan::scan(source_dir)?;
    let images = listing
        .images
        .iter()
        .map(|image| -> Result<PlannedImage, ProcessError> {
            let outputs = plan_tier_variants(
                &image.path,
                output_dir,
                &image.base_name,
                &image.extension,
                &tier_config,
            )
            .into_iter()
            .map(|(tier, params)| PlannedOutput {
                tier,
                path: params.output,
                size: TierSize::new(params.width, params.height),
            })
            .collect();

            Ok(PlannedImage {
                file_name: image.file_name(),
                dimensions: get_dimensions(backend, &image.path)?,
                outputs,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Plan {
        images,
        skipped: listing.skipped,
    })
}

fn to_artifact(image: &SourceImage, variant: GeneratedVariant) -> OutputArtifact {
    OutputArtifact {
        source: image.path.clone(),
        tier: variant.tier,
        path: variant.path,
        width: variant.width,
        height: variant.height,
    }
}
