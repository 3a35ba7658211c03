//! `#rrggbb` color values shared by extraction results and feature records

use crate::color::sample::RgbSample;
use crate::io::error::AvatarError;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An opaque sRGB color with 8 bits per channel
///
/// Displays as lowercase `#rrggbb`. Parsing accepts either letter case but
/// requires the leading `#` and exactly six hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor([u8; 3]);

impl HexColor {
    /// Create a color from its channels
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self([red, green, blue])
    }

    /// Channels in red, green, blue order
    pub const fn channels(self) -> [u8; 3] {
        self.0
    }

    /// Red channel
    pub const fn red(self) -> u8 {
        self.0[0]
    }

    /// Green channel
    pub const fn green(self) -> u8 {
        self.0[1]
    }

    /// Blue channel
    pub const fn blue(self) -> u8 {
        self.0[2]
    }

    /// Encode a floating point sample, rounding to nearest then clamping to `0..=255`
    pub fn from_sample(sample: RgbSample) -> Self {
        Self([
            encode_channel(sample.red),
            encode_channel(sample.green),
            encode_channel(sample.blue),
        ])
    }
}

// Halves round away from zero, which matches round-half-up for the
// non-negative intensities produced by sampling
fn encode_channel(value: f64) -> u8 {
    num_traits::clamp(value.round(), 0.0, 255.0)
        .to_u8()
        .unwrap_or(0)
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [red, green, blue] = self.0;
        write!(f, "#{red:02x}{green:02x}{blue:02x}")
    }
}

impl FromStr for HexColor {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AvatarError::InvalidColor {
            value: s.to_string(),
        };

        let digits = s
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.bytes().all(|b| b.is_ascii_hexdigit()))
            .ok_or_else(invalid)?;

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(invalid)
        };

        Ok(Self([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
