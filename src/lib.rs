//! Photo-to-avatar color extraction with vector avatar rendering
//!
//! A photo is resampled to a fixed width, fixed hair, skin and eye regions are
//! averaged, and each mean is scaled by an empirical tonal multiplier before
//! being encoded as a hex color. The colors feed a five-field feature record
//! that renders as a simple SVG avatar.

#![forbid(unsafe_code)]

/// Feature records and SVG rendering
pub mod avatar;
/// Hex colors, channel samples and tonal multipliers
pub mod color;
/// Image normalization, region sampling and color extraction
pub mod extraction;
/// Command-line processing, configuration, logging and error handling
pub mod io;

pub use avatar::{EyeShape, FeatureRecord, HairStyle};
pub use color::HexColor;
pub use extraction::{ColorExtractor, ExtractionResult, ExtractorConfig};
pub use io::error::{AvatarError, Result};
