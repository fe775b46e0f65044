//! Source directory enumeration.
//!
//! Stage 1 of the pipeline. Lists the source directory (non-recursively) and
//! keeps every regular file whose extension is one of [`IMAGE_EXTENSIONS`],
//! compared case-insensitively:
//!
//! ```text
//! original_textures/
//! ├── config.toml        # optional, see crate::config
//! ├── earth.jpg          # → SourceImage { base_name: "earth", extension: ".jpg" }
//! ├── Moon.PNG           # → SourceImage { base_name: "Moon", extension: ".PNG" }
//! ├── sky.gif            # skipped: unsupported extension
//! ├── .hidden.png        # → SourceImage { base_name: ".hidden", extension: ".png" }
//! ├── .png               # skipped: no extension (the whole name is the base)
//! ├── .DS_Store          # skipped: no extension
//! └── drafts/            # skipped: not a regular file
//! ```
//!
//! Image files whose name is not valid UTF-8 cannot be turned into output
//! names; they are listed in [`Listing::skipped`] so the caller can report
//! them.
//!
//! Content is not inspected here; a corrupt `.jpg` is only discovered when
//! the process stage decodes it.

use crate::naming::split_file_name;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions (without dot, lowercase) accepted as source images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),
}

/// A source image discovered in the source directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub path: PathBuf,
    /// File name without its final extension (`earth` for `earth.jpg`).
    pub base_name: String,
    /// Final extension with leading dot, case preserved (`.jpg`, `.PNG`).
    pub extension: String,
}

/// The outcome of listing a source directory.
#[derive(Debug, Default)]
pub struct Listing {
    /// Source images, sorted by path.
    pub images: Vec<SourceImage>,
    /// Image files left out because their name is not valid UTF-8.
    pub skipped: Vec<PathBuf>,
}

impl SourceImage {
    /// Build a `SourceImage` from a path, or `None` if it isn't one.
    ///
    /// Checks the name only: names without a supported extension (including
    /// `.png` on its own) and non-UTF-8 names are rejected. The caller is
    /// responsible for checking it is a file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let (base, ext) = split_file_name(file_name);
        if !is_image_extension(ext) {
            return None;
        }
        Some(Self {
            path: path.to_path_buf(),
            base_name: base.to_string(),
            extension: ext.to_string(),
        })
    }

    /// The source file name, for display.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }
}

/// Whether an extension (with or without leading dot) is a supported image type.
pub fn is_image_extension(ext: &str) -> bool {
    let ext = ext.strip_prefix('.').unwrap_or(ext);
    IMAGE_EXTENSIONS
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(ext))
}

/// Whether a path has a supported image extension but a non-UTF-8 name.
fn is_unnamable_image(path: &Path) -> bool {
    let utf8_name = path.file_name().and_then(|n| n.to_str()).is_some();
    let image_ext = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(is_image_extension);
    !utf8_name && image_ext
}

/// List the source images in `source`, sorted by file name.
///
/// Fails if `source` does not exist or cannot be read.
pub fn scan(source: &Path) -> Result<Listing, ScanError> {
    if !source.is_dir() {
        return Err(ScanError::SourceNotFound(source.to_path_buf()));
    }

    let mut listing = Listing::default();
    for entry in fs::read_dir(source)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(image) = SourceImage::from_path(&path) {
            listing.images.push(image);
        } else if is_unnamable_image(&path) {
            listing.skipped.push(path);
        }
    }

    listing.images.sort_by(|a, b| a.path.cmp(&b.path));
    listing.skipped.sort();
    Ok(listing)
}
