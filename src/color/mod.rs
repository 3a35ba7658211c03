//! Color values and the arithmetic applied to sampled regions

/// Hex-encoded sRGB colors
pub mod hex;
/// Floating point channel means taken from image regions
pub mod sample;
/// Per-channel tonal multipliers
pub mod tone;

pub use hex::HexColor;
pub use sample::RgbSample;
pub use tone::ToneMultiplier;
