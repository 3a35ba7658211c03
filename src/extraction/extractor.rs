//! Photo-to-feature color extraction
//!
//! Samples the hair band, the central skin box and two eye boxes of a
//! normalized photo, averages the eyes, scales each mean by its tonal
//! multiplier and encodes the result as hex colors.

use crate::color::hex::HexColor;
use crate::color::tone::ToneMultiplier;
use crate::extraction::normalize::{NormalizedImage, load_normalized};
use crate::extraction::region::{RegionLayout, sample_region};
use crate::io::configuration::{EYE_TONE, HAIR_TONE, SKIN_TONE, TARGET_WIDTH};
use crate::io::error::{AvatarError, Result, WithPath, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Tunable parameters for [`ColorExtractor`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorConfig {
    /// Width photos are resampled to before sampling
    pub target_width: u32,
    /// Adjustment applied to the hair mean
    pub hair_multiplier: ToneMultiplier,
    /// Adjustment applied to the skin mean
    pub skin_multiplier: ToneMultiplier,
    /// Adjustment applied to the averaged eye mean
    pub eye_multiplier: ToneMultiplier,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            target_width: TARGET_WIDTH,
            hair_multiplier: HAIR_TONE,
            skin_multiplier: SKIN_TONE,
            eye_multiplier: EYE_TONE,
        }
    }
}

/// The three colors derived from one photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Tone-adjusted mean of the skin box
    pub skin_tone: HexColor,
    /// Tone-adjusted mean of the hair band
    pub hair_color: HexColor,
    /// Tone-adjusted mean of both eye boxes
    pub eye_color: HexColor,
}

/// Estimates hair, skin and eye colors from photos
///
/// Holds only configuration; every call decodes into its own buffer
#[derive(Debug, Clone, Default)]
pub struct ColorExtractor {
    config: ExtractorConfig,
}

impl ColorExtractor {
    /// Create an extractor with the given configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the target width is zero
    pub fn new(config: ExtractorConfig) -> Result<Self> {
        if config.target_width == 0 {
            return Err(invalid_parameter(
                "target_width",
                &config.target_width,
                &"must be at least one pixel",
            ));
        }
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract colors from an encoded image in memory
    ///
    /// # Errors
    ///
    /// Returns `Decode` for unreadable images and `RegionOutOfBounds` when the
    /// normalized image is too short for the fixed regions
    pub fn extract_from_bytes(&self, bytes: &[u8]) -> Result<ExtractionResult> {
        let normalized = load_normalized(bytes, self.config.target_width)?;
        self.extract_normalized(&normalized)
    }

    /// Extract colors from an image file
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if the file cannot be read, otherwise the same
    /// errors as [`Self::extract_from_bytes`] with the path attached
    pub fn extract_from_path(&self, path: &Path) -> Result<ExtractionResult> {
        let bytes = std::fs::read(path).map_err(|e| AvatarError::FileSystem {
            path: path.to_path_buf(),
            operation: "read image",
            source: e,
        })?;
        self.extract_from_bytes(&bytes).with_path(path)
    }

    /// Extract colors from an image that is already at its sampling size
    ///
    /// # Errors
    ///
    /// Returns `RegionOutOfBounds` if any region falls outside the image
    pub fn extract_normalized(&self, image: &NormalizedImage) -> Result<ExtractionResult> {
        let layout = RegionLayout::for_dimensions(image.width(), image.height());
        debug!(?layout, "sampling regions");

        let hair = sample_region(image, &layout.hair)?;
        let skin = sample_region(image, &layout.skin)?;
        let left_eye = sample_region(image, &layout.left_eye)?;
        let right_eye = sample_region(image, &layout.right_eye)?;
        let eyes = left_eye.average(right_eye);
        debug!(?hair, ?skin, ?eyes, "region means");

        Ok(ExtractionResult {
            skin_tone: self.config.skin_multiplier.apply(skin).to_hex(),
            hair_color: self.config.hair_multiplier.apply(hair).to_hex(),
            eye_color: self.config.eye_multiplier.apply(eyes).to_hex(),
        })
    }
}
