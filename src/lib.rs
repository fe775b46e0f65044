//! # texture-tiers
//!
//! Batch-converts a flat directory of high-resolution textures into three
//! resolution tiers for web delivery:
//!
//! ```text
//! original_textures/earth.jpg (4000x2000)
//!   → public/textures/low/earth_low.jpg    (1024x512)
//!   → public/textures/med/earth_med.jpg    (2048x1024)
//!   → public/textures/high/earth_high.jpg  (4096x2048)
//! ```
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan     original_textures/  →  Vec<SourceImage>   (extension filter)
//! 2. Process  SourceImage          →  <tier>/<base>_<tier><ext>
//! ```
//!
//! Every run reprocesses every file and overwrites previous outputs. Files are
//! processed one at a time in file-name order and the run stops at the first
//! decode or write error.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists `.jpg`/`.jpeg`/`.png` files in the source directory |
//! | [`process`] | Resizes every source into every tier, emits progress events |
//! | [`imaging`] | Decode, Lanczos3 stretch resize, JPEG/PNG encode |
//! | [`config`] | Optional `config.toml` overriding tier sizes and quality |
//! | [`naming`] | `<base>_<tier><ext>` output naming |
//! | [`types`] | [`Tier`](types::Tier) and [`TierSize`](types::TierSize) |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Stretch, don't fit
//!
//! Each tier has fixed dimensions and sources are resized to exactly those
//! dimensions regardless of their own aspect ratio. Equirectangular planet
//! textures are 2:1 already, so for the intended inputs nothing is distorted.
//! For anything else, `texture-tiers check` reports how much each tier will
//! stretch the image.
//!
//! ## Fixed paths
//!
//! The binary always reads `original_textures/` and writes
//! `public/textures/`, relative to the working directory. The library API
//! takes both as arguments.

pub mod config;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod process;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
