//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Resize
//!
//! ```text
//! 001 earth.jpg (4000x2000)
//! Saved: public/textures/low/earth_low.jpg
//! Saved: public/textures/med/earth_med.jpg
//! Saved: public/textures/high/earth_high.jpg
//!
//! Resized 1 image into 3 files
//! ```
//!
//! Image files with a non-UTF-8 name are reported before processing starts
//! and counted in the summary:
//!
//! ```text
//! Skipped (file name is not valid UTF-8): original_textures/m�rs.png
//! ...
//! Resized 1 image into 3 files, skipped 1 file
//! ```
//!
//! ## Check
//!
//! ```text
//! 001 moon.png (1000x1000)
//!     low: public/textures/low/moon_low.png (1024x512, stretched 2.00x horizontally)
//!     med: public/textures/med/moon_med.png (2048x1024, stretched 2.00x horizontally)
//!     high: public/textures/high/moon_high.png (4096x2048, stretched 2.00x horizontally)
//!
//! 1 image, 3 files would be written
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::imaging::{aspect_distortion, is_distorted};
use crate::process::{Plan, ProcessEvent, ProcessResult};
use std::path::Path;

/// Distortion below this fraction is not worth a warning (rounding noise).
const DISTORTION_TOLERANCE: f64 = 0.01;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// Image header line: positional index, file name and source dimensions.
///
/// ```text
/// 001 earth.jpg (4000x2000)
/// ```
fn image_header(index: usize, file_name: &str, dimensions: (u32, u32)) -> String {
    format!(
        "{} {} ({}x{})",
        format_index(index),
        file_name,
        dimensions.0,
        dimensions.1
    )
}

fn skipped_line(path: &Path) -> String {
    format!(
        "Skipped (file name is not valid UTF-8): {}",
        path.display()
    )
}

/// Describe how a stretch resize changes the aspect ratio, if noticeably.
fn distortion_note(source: (u32, u32), target: (u32, u32)) -> Option<String> {
    let distortion = aspect_distortion(source, target);
    if !is_distorted(distortion, DISTORTION_TOLERANCE) {
        return None;
    }
    Some(if distortion > 1.0 {
        format!("stretched {:.2}x horizontally", distortion)
    } else {
        format!("stretched {:.2}x vertically", 1.0 / distortion)
    })
}

// ============================================================================
// Resize output
// ============================================================================

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::ImageStarted {
            index,
            file_name,
            dimensions,
        } => vec![image_header(*index, file_name, *dimensions)],
        ProcessEvent::Saved { path, .. } => vec![format!("Saved: {}", path.display())],
        ProcessEvent::Skipped { path } => vec![skipped_line(path)],
    }
}

/// Format the closing summary of a resize run.
pub fn format_summary(result: &ProcessResult) -> Vec<String> {
    let mut summary = format!(
        "Resized {} into {}",
        plural(result.images, "image", "images"),
        plural(result.outputs.len(), "file", "files")
    );
    if !result.skipped.is_empty() {
        summary.push_str(&format!(
            ", skipped {}",
            plural(result.skipped.len(), "file", "files")
        ));
    }
    vec![String::new(), summary]
}

pub fn print_summary(result: &ProcessResult) {
    for line in format_summary(result) {
        println!("{}", line);
    }
}

// ============================================================================
// Check output
// ============================================================================

/// Format the dry-run plan produced by `check`.
pub fn format_check_output(plan: &Plan) -> Vec<String> {
    let planned = &plan.images;
    let mut lines: Vec<String> = plan.skipped.iter().map(|p| skipped_line(p)).collect();

    for (i, image) in planned.iter().enumerate() {
        lines.push(image_header(i + 1, &image.file_name, image.dimensions));
        for output in &image.outputs {
            let target = (output.size.width, output.size.height);
            let detail = match distortion_note(image.dimensions, target) {
                Some(note) => format!("{}, {}", output.size, note),
                None => output.size.to_string(),
            };
            lines.push(format!(
                "{}{}: {} ({})",
                indent(1),
                output.tier,
                output.path.display(),
                detail
            ));
        }
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    let files: usize = planned.iter().map(|p| p.outputs.len()).sum();
    lines.push(format!(
        "{}, {} would be written",
        plural(planned.len(), "image", "images"),
        plural(files, "file", "files")
    ));
    lines
}

pub fn print_check_output(plan: &Plan) {
    for line in format_check_output(plan) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
