//! Filename handling for source images and tier outputs.
//!
//! A source file name is split into a base name and its final extension;
//! outputs are named `<base>_<tier><ext>` with the extension kept exactly as
//! it appeared on the source (case included):
//!
//! - `earth.jpg` → `earth_low.jpg`, `earth_med.jpg`, `earth_high.jpg`
//! - `Moon.PNG` → `Moon_low.PNG`, ...
//! - `clouds.v2.jpg` → `clouds.v2_low.jpg`, ... (only the last extension splits)

use crate::types::Tier;
use std::path::{Path, PathBuf};

/// Split a file name into `(base, extension)`.
///
/// The extension includes its leading dot and is empty when there is none.
/// Leading dots never start an extension, so `.jpg` is a base name with no
/// extension rather than an empty base with extension `.jpg`.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading_dots..].rfind('.') {
        Some(pos) => file_name.split_at(leading_dots + pos),
        None => (file_name, ""),
    }
}

/// Build the output file name for a tier: `<base>_<tier><ext>`.
pub fn tier_file_name(base: &str, tier: Tier, extension: &str) -> String {
    format!("{}_{}{}", base, tier.name(), extension)
}

/// Full output path: `<output_root>/<tier>/<base>_<tier><ext>`.
pub fn tier_output_path(output_root: &Path, base: &str, tier: Tier, extension: &str) -> PathBuf {
    output_root
        .join(tier.name())
        .join(tier_file_name(base, tier, extension))
}
