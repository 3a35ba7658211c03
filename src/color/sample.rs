//! Un-clamped channel means produced by region sampling

use crate::color::hex::HexColor;

/// Mean red, green and blue intensities over a region
///
/// Values are kept as `f64` and are not clamped until encoded as a [`HexColor`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbSample {
    /// Mean red intensity
    pub red: f64,
    /// Mean green intensity
    pub green: f64,
    /// Mean blue intensity
    pub blue: f64,
}

impl RgbSample {
    /// Create a sample from raw channel values
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Element-wise mean of two samples
    #[must_use]
    pub const fn average(self, other: Self) -> Self {
        Self {
            red: f64::midpoint(self.red, other.red),
            green: f64::midpoint(self.green, other.green),
            blue: f64::midpoint(self.blue, other.blue),
        }
    }

    /// Round and clamp each channel into a displayable color
    pub fn to_hex(self) -> HexColor {
        HexColor::from_sample(self)
    }
}

impl From<HexColor> for RgbSample {
    fn from(color: HexColor) -> Self {
        let [red, green, blue] = color.channels();
        Self::new(f64::from(red), f64::from(green), f64::from(blue))
    }
}
