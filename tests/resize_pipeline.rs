//! End-to-end tests through the public library API: real files in, real
//! files out.
//!
//! Most tests shrink the tiers through `config.toml` so encoding stays fast in
//! debug builds. The full-size example is `#[ignore]`d; run it with
//! `cargo test --test resize_pipeline -- --ignored`.

use image::{ImageEncoder, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use tempfile::TempDir;
use texture_tiers::output::format_process_event;
use texture_tiers::process::{self, ProcessConfig, ProcessError, ProcessEvent};

const SMALL_TIERS: &str = r#"
quality = 85

[tiers.low]
width = 16
height = 8

[tiers.med]
width = 32
height = 16

[tiers.high]
width = 64
height = 32
"#;

fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        image::Rgb([(x * 7 % 256) as u8, (y * 3 % 256) as u8, 90])
    });
    let writer = std::io::BufWriter::new(fs::File::create(path).unwrap());
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
    img.save(path).unwrap();
}

/// A source directory with the small-tier config and the given images.
fn setup_source(tmp: &TempDir) -> (PathBuf, PathBuf) {
    let source = tmp.path().join("original_textures");
    let output = tmp.path().join("public/textures");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("config.toml"), SMALL_TIERS).unwrap();
    (source, output)
}

fn dims(path: PathBuf) -> (u32, u32) {
    image::image_dimensions(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

#[test]
fn every_image_lands_in_every_tier() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_jpeg(&source.join("earth.jpg"), 120, 60);
    write_png(&source.join("Moon.PNG"), 50, 50);

    let result = process::run(&source, &output, None).unwrap();

    assert_eq!(result.images, 2);
    assert_eq!(result.outputs.len(), 6);
    assert_eq!(dims(output.join("low/earth_low.jpg")), (16, 8));
    assert_eq!(dims(output.join("med/earth_med.jpg")), (32, 16));
    assert_eq!(dims(output.join("high/earth_high.jpg")), (64, 32));
    // Square source is stretched, not letterboxed
    assert_eq!(dims(output.join("high/Moon_high.PNG")), (64, 32));
}

#[test]
fn unsupported_files_are_ignored() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_jpeg(&source.join("earth.jpg"), 40, 20);
    fs::write(source.join("sky.gif"), b"GIF89a").unwrap();
    fs::create_dir(source.join("drafts")).unwrap();
    write_jpeg(&source.join("drafts/wip.jpg"), 40, 20);

    process::run(&source, &output, None).unwrap();

    for tier in ["low", "med", "high"] {
        let names: Vec<String> = fs::read_dir(output.join(tier))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![format!("earth_{tier}.jpg")]);
    }
}

#[test]
fn format_is_read_from_content() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_png(&source.join("earth.jpg"), 40, 20);

    let result = process::run(&source, &output, None).unwrap();

    assert_eq!(result.outputs.len(), 3);
    assert_eq!(dims(output.join("med/earth_med.jpg")), (32, 16));
    let bytes = fs::read(output.join("med/earth_med.jpg")).unwrap();
    assert_eq!(&bytes[0..2], &[0xFF, 0xD8]);
}

#[test]
fn dot_prefixed_names_are_processed() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_png(&source.join(".hidden.png"), 40, 20);

    let result = process::run(&source, &output, None).unwrap();

    assert_eq!(result.images, 1);
    assert_eq!(dims(output.join("low/.hidden_low.png")), (16, 8));
    assert_eq!(dims(output.join("high/.hidden_high.png")), (64, 32));
}

#[test]
fn empty_source_produces_nothing() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);

    let result = process::run(&source, &output, None).unwrap();

    assert_eq!(result.images, 0);
    assert!(result.outputs.is_empty());
    assert_eq!(fs::read_dir(output.join("low")).unwrap().count(), 0);
}

#[test]
fn rerun_overwrites_in_place() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_jpeg(&source.join("earth.jpg"), 40, 20);

    let first = process::run(&source, &output, None).unwrap();
    let second = process::run(&source, &output, None).unwrap();

    let paths = |r: &process::ProcessResult| -> Vec<PathBuf> {
        r.outputs.iter().map(|o| o.path.clone()).collect()
    };
    assert_eq!(paths(&first), paths(&second));
    assert_eq!(fs::read_dir(output.join("med")).unwrap().count(), 1);
}

#[test]
fn missing_source_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let result = process::run(
        &tmp.path().join("original_textures"),
        &tmp.path().join("public/textures"),
        None,
    );
    assert!(matches!(result, Err(ProcessError::Scan(_))));
}

#[test]
fn corrupt_image_fails_the_run() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    fs::write(source.join("broken.png"), b"\x89PNG but not really").unwrap();

    let result = process::run(&source, &output, None);
    assert!(result.is_err());
}

#[test]
fn progress_lines_name_each_saved_file() {
    let tmp = TempDir::new().unwrap();
    let (source, output) = setup_source(&tmp);
    write_jpeg(&source.join("earth.jpg"), 40, 20);

    let (tx, rx) = mpsc::channel();
    process::run(&source, &output, Some(tx)).unwrap();

    let saved: Vec<String> = rx
        .iter()
        .filter(|e| matches!(e, ProcessEvent::Saved { .. }))
        .flat_map(|e| format_process_event(&e))
        .collect();
    assert_eq!(
        saved,
        vec![
            format!("Saved: {}", output.join("low/earth_low.jpg").display()),
            format!("Saved: {}", output.join("med/earth_med.jpg").display()),
            format!("Saved: {}", output.join("high/earth_high.jpg").display()),
        ]
    );
}

#[test]
#[ignore] // Full-size encode is slow in debug builds
fn earth_example_at_default_tiers() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("original_textures");
    let output = tmp.path().join("public/textures");
    fs::create_dir_all(&source).unwrap();
    write_jpeg(&source.join("earth.jpg"), 4000, 2000);

    process::process(&source, &output, &ProcessConfig::default(), None).unwrap();

    assert_eq!(dims(output.join("low/earth_low.jpg")), (1024, 512));
    assert_eq!(dims(output.join("med/earth_med.jpg")), (2048, 1024));
    assert_eq!(dims(output.join("high/earth_high.jpg")), (4096, 2048));
}
