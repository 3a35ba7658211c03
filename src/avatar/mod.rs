//! Avatar description and vector rendering

/// Feature record with defaults, reset and update operations
pub mod features;
/// SVG rendering of feature records
pub mod render;

pub use features::{EyeShape, FeatureRecord, HairStyle};
