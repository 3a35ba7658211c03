//! Extraction constants and runtime configuration defaults

use crate::color::hex::HexColor;
use crate::color::tone::ToneMultiplier;

/// Width every source photo is resampled to before sampling
pub const TARGET_WIDTH: u32 = 600;
/// Largest normalized raster, in pixels, that will be allocated
pub const MAX_NORMALIZED_PIXELS: u64 = 50_000_000;

// Region geometry, expressed as fractions of the normalized width and height
/// Left edge of the hair band
pub const HAIR_X_FRACTION: f64 = 0.10;
/// Width of the hair band
pub const HAIR_WIDTH_FRACTION: f64 = 0.80;
/// Height of the hair band, measured from the top edge
pub const HAIR_HEIGHT_FRACTION: f64 = 0.15;
/// Minimum hair band height in pixels
pub const MIN_HAIR_HEIGHT: i64 = 10;

/// Left edge of the skin box
pub const SKIN_X_FRACTION: f64 = 0.25;
/// Top edge of the skin box
pub const SKIN_Y_FRACTION: f64 = 0.30;
/// Width of the skin box
pub const SKIN_WIDTH_FRACTION: f64 = 0.50;
/// Height of the skin box
pub const SKIN_HEIGHT_FRACTION: f64 = 0.40;

/// Top edge of both eye boxes
pub const EYE_Y_FRACTION: f64 = 0.45;
/// Horizontal center of the left eye box
pub const LEFT_EYE_CENTER_FRACTION: f64 = 0.35;
/// Horizontal center of the right eye box
pub const RIGHT_EYE_CENTER_FRACTION: f64 = 0.65;
/// Eye box side as a fraction of the shorter image dimension
pub const EYE_BOX_FRACTION: f64 = 0.04;
/// Minimum eye box side in pixels
pub const MIN_EYE_BOX: i64 = 6;

// Empirical palette adjustments applied to sampled means before encoding
/// Hair: darker and warmer
pub const HAIR_TONE: ToneMultiplier = ToneMultiplier::new(0.90, 0.70, 0.60);
/// Skin: slightly warmer
pub const SKIN_TONE: ToneMultiplier = ToneMultiplier::new(1.02, 0.95, 0.90);
/// Eyes: slightly cooler
pub const EYE_TONE: ToneMultiplier = ToneMultiplier::new(0.90, 0.95, 1.05);

// Feature record defaults
/// Default skin tone
pub const DEFAULT_SKIN_TONE: HexColor = HexColor::new(0xff, 0xcd, 0x94);
/// Default hair color
pub const DEFAULT_HAIR_COLOR: HexColor = HexColor::new(0x7b, 0x4b, 0x2a);
/// Default eye color
pub const DEFAULT_EYE_COLOR: HexColor = HexColor::new(0x3a, 0x75, 0xc4);

// Output settings
/// Suffix added to rendered avatar filenames
pub const AVATAR_SUFFIX: &str = "_avatar";
/// Suffix added to feature report filenames
pub const REPORT_SUFFIX: &str = "_features";
/// Side length of the square avatar canvas
pub const AVATAR_SIZE: u32 = 200;

/// Image extensions picked up when scanning a directory (compared case-insensitively)
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tiff", "tif"];

// Progress bar display settings
/// Threshold above which only the batch bar is shown
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "toonface=warn";
/// Filter used with `--verbose` when `RUST_LOG` is unset
pub const VERBOSE_LOG_FILTER: &str = "toonface=debug";
