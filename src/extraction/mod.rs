//! Photo normalization, region sampling and color extraction

/// Color extraction orchestrating the region samples
pub mod extractor;
/// Image decoding and fixed-width resampling
pub mod normalize;
/// Region geometry and mean-color sampling
pub mod region;

pub use extractor::{ColorExtractor, ExtractionResult, ExtractorConfig};
pub use normalize::NormalizedImage;
