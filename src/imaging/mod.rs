//! Image processing with the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Resize** | Lanczos3 stretch to exact tier dimensions |
//! | **Encode** | JPEG with quality, PNG lossless |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining naming + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{aspect_distortion, is_distorted};
pub use operations::{
    GeneratedVariant, TierConfig, create_tier_variants, get_dimensions, plan_tier_variants,
};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
