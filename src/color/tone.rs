//! Fixed per-channel scaling applied to sampled colors before encoding

use crate::color::sample::RgbSample;

/// Scaling constants for the red, green and blue channels
///
/// The values are empirical palette adjustments rather than anything derived
/// from image content. See [`crate::io::configuration::HAIR_TONE`] and siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMultiplier {
    /// Red channel factor
    pub red: f64,
    /// Green channel factor
    pub green: f64,
    /// Blue channel factor
    pub blue: f64,
}

impl ToneMultiplier {
    /// Create a multiplier from per-channel factors
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Multiplier that leaves samples unchanged
    pub const fn identity() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// Scale each channel of `sample`; the result is not clamped
    pub fn apply(&self, sample: RgbSample) -> RgbSample {
        RgbSample::new(
            sample.red * self.red,
            sample.green * self.green,
            sample.blue * self.blue,
        )
    }
}

impl Default for ToneMultiplier {
    fn default() -> Self {
        Self::identity()
    }
}
