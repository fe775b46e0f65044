//! Pure calculation functions for image dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// How much a stretch resize from `source` to `target` distorts the aspect ratio.
///
/// Returns `target_aspect / source_aspect`: `1.0` means no distortion, `> 1.0`
/// means the image is stretched horizontally, `< 1.0` vertically.
///
/// # Examples
/// ```
/// # use texture_tiers::imaging::aspect_distortion;
/// // 2:1 equirectangular source into a 2:1 tier: no distortion
/// assert_eq!(aspect_distortion((4000, 2000), (1024, 512)), 1.0);
///
/// // Square source into a 2:1 tier: stretched 2x horizontally
/// assert_eq!(aspect_distortion((1000, 1000), (1024, 512)), 2.0);
/// ```
pub fn aspect_distortion(source: (u32, u32), target: (u32, u32)) -> f64 {
    let (src_w, src_h) = source;
    let (tgt_w, tgt_h) = target;
    if src_w == 0 || src_h == 0 || tgt_w == 0 || tgt_h == 0 {
        return 1.0;
    }

    let src_aspect = src_w as f64 / src_h as f64;
    let tgt_aspect = tgt_w as f64 / tgt_h as f64;
    tgt_aspect / src_aspect
}

/// Whether a distortion factor deviates from `1.0` by more than `tolerance`
/// in either direction (e.g. `0.01` for 1%).
pub fn is_distorted(distortion: f64, tolerance: f64) -> bool {
    let factor = if distortion >= 1.0 {
        distortion
    } else {
        1.0 / distortion
    };
    factor - 1.0 > tolerance
}
