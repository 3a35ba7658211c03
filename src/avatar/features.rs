//! The five-field avatar description and the operations that mutate it

use crate::color::hex::HexColor;
use crate::extraction::extractor::{ColorExtractor, ExtractionResult};
use crate::io::configuration::{DEFAULT_EYE_COLOR, DEFAULT_HAIR_COLOR, DEFAULT_SKIN_TONE};
use crate::io::error::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hair shape drawn above the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    /// Narrow band over the forehead
    #[default]
    Short,
    /// Tall block framing the face
    Long,
    /// Large circle behind the top of the head
    Curly,
}

/// Eye outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EyeShape {
    /// Circle
    #[default]
    Round,
    /// Horizontal ellipse
    Almond,
}

impl fmt::Display for HairStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Short => "short",
            Self::Long => "long",
            Self::Curly => "curly",
        })
    }
}

impl fmt::Display for EyeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Round => "round",
            Self::Almond => "almond",
        })
    }
}

/// Everything the renderer needs to draw an avatar
///
/// All fields are always valid; updates replace whole fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Face fill
    pub skin_tone: HexColor,
    /// Hair fill
    pub hair_color: HexColor,
    /// Hair shape
    pub hair_style: HairStyle,
    /// Eye fill
    pub eye_color: HexColor,
    /// Eye shape
    pub eye_shape: EyeShape,
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            skin_tone: DEFAULT_SKIN_TONE,
            hair_color: DEFAULT_HAIR_COLOR,
            hair_style: HairStyle::default(),
            eye_color: DEFAULT_EYE_COLOR,
            eye_shape: EyeShape::default(),
        }
    }
}

impl FeatureRecord {
    /// Restore every field to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Overwrite the three colors; hair style and eye shape are kept
    pub const fn apply_extraction(&mut self, result: &ExtractionResult) {
        self.skin_tone = result.skin_tone;
        self.hair_color = result.hair_color;
        self.eye_color = result.eye_color;
    }

    /// Extract colors from `bytes` and apply them if extraction succeeds
    ///
    /// # Errors
    ///
    /// Returns the extraction error; the record is left exactly as it was
    pub fn apply_photo(
        &mut self,
        extractor: &ColorExtractor,
        bytes: &[u8],
    ) -> Result<ExtractionResult> {
        let result = extractor.extract_from_bytes(bytes)?;
        self.apply_extraction(&result);
        Ok(result)
    }

    /// Set the face fill
    pub const fn set_skin_tone(&mut self, color: HexColor) {
        self.skin_tone = color;
    }

    /// Set the hair fill
    pub const fn set_hair_color(&mut self, color: HexColor) {
        self.hair_color = color;
    }

    /// Set the hair shape
    pub const fn set_hair_style(&mut self, style: HairStyle) {
        self.hair_style = style;
    }

    /// Set the eye fill
    pub const fn set_eye_color(&mut self, color: HexColor) {
        self.eye_color = color;
    }

    /// Set the eye shape
    pub const fn set_eye_shape(&mut self, shape: EyeShape) {
        self.eye_shape = shape;
    }
}
