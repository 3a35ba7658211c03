//! Decoding and fixed-width resampling of source photos
//!
//! Region coordinates are fractions of the image size, so every photo is
//! resampled to the same width first. This keeps region pixel counts, and
//! therefore the averaging behaviour, comparable across input resolutions.

use crate::io::configuration::MAX_NORMALIZED_PIXELS;
use crate::io::error::{AvatarError, MEMORY_SOURCE, Result, computation_error, invalid_parameter};
use image::error::{LimitError, LimitErrorKind};
use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use ndarray::{Array3, ArrayView3};
use std::path::PathBuf;
use tracing::debug;

/// A decoded RGB raster at the normalization width
///
/// Stored as `(height, width, channel)`; alpha is discarded on construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedImage {
    pixels: Array3<u8>,
}

impl NormalizedImage {
    /// Wrap an RGB image without resampling it
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel buffer does not match the image dimensions
    pub fn from_rgb(image: RgbImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        let pixels = Array3::from_shape_vec((height as usize, width as usize, 3), image.into_raw())
            .map_err(|e| computation_error("raster layout", &e))?;
        Ok(Self { pixels })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.dim().1 as u32
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.dim().0 as u32
    }

    /// Read-only view of the pixel data
    pub fn pixels(&self) -> ArrayView3<'_, u8> {
        self.pixels.view()
    }
}

/// Height that preserves the aspect ratio at `target_width`
///
/// Never less than one pixel so the resampled buffer is well formed
pub fn target_height(source_width: u32, source_height: u32, target_width: u32) -> u32 {
    let scale = f64::from(target_width) / f64::from(source_width);
    let height = (f64::from(source_height) * scale).round();
    num_traits::clamp(height, 1.0, f64::from(u32::MAX)) as u32
}

/// Decode an encoded image held in memory
///
/// # Errors
///
/// Returns `Decode` if the format is unrecognized, the data is corrupt, or
/// the image has a zero dimension
pub fn decode(bytes: &[u8]) -> Result<DynamicImage> {
    let image = image::load_from_memory(bytes)?;
    if image.width() == 0 || image.height() == 0 {
        return Err(dimension_error());
    }
    Ok(image)
}

/// Resample a decoded image to `target_width`, preserving aspect ratio
///
/// # Errors
///
/// Returns an error if `target_width` is zero, the image has no pixels, or
/// the resampled raster would exceed `MAX_NORMALIZED_PIXELS`
pub fn normalize(image: &DynamicImage, target_width: u32) -> Result<NormalizedImage> {
    if target_width == 0 {
        return Err(invalid_parameter(
            "target_width",
            &target_width,
            &"must be at least one pixel",
        ));
    }
    let (source_width, source_height) = (image.width(), image.height());
    if source_width == 0 || source_height == 0 {
        return Err(dimension_error());
    }

    let height = target_height(source_width, source_height, target_width);
    if u64::from(target_width) * u64::from(height) > MAX_NORMALIZED_PIXELS {
        debug!(width = target_width, height, "normalized raster too large");
        return Err(dimension_error());
    }
    let rgb = image.to_rgb8();
    let resized = if (source_width, source_height) == (target_width, height) {
        rgb
    } else {
        image::imageops::resize(&rgb, target_width, height, FilterType::Triangle)
    };

    debug!(
        source_width,
        source_height,
        width = target_width,
        height,
        "normalized image"
    );
    NormalizedImage::from_rgb(resized)
}

fn dimension_error() -> AvatarError {
    AvatarError::Decode {
        path: PathBuf::from(MEMORY_SOURCE),
        source: image::ImageError::Limits(LimitError::from_kind(LimitErrorKind::DimensionError)),
    }
}

/// Decode and normalize in one step
///
/// The decoded buffer is dropped before returning, whether or not
/// normalization succeeds
///
/// # Errors
///
/// Propagates errors from [`decode`] and [`normalize`]
pub fn load_normalized(bytes: &[u8], target_width: u32) -> Result<NormalizedImage> {
    let decoded = decode(bytes)?;
    normalize(&decoded, target_width)
}
