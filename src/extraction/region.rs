//! Fixed facial regions and mean-color sampling over them

use crate::color::sample::RgbSample;
use crate::extraction::normalize::NormalizedImage;
use crate::io::configuration::{
    EYE_BOX_FRACTION, EYE_Y_FRACTION, HAIR_HEIGHT_FRACTION, HAIR_WIDTH_FRACTION, HAIR_X_FRACTION,
    LEFT_EYE_CENTER_FRACTION, MIN_EYE_BOX, MIN_HAIR_HEIGHT, RIGHT_EYE_CENTER_FRACTION,
    SKIN_HEIGHT_FRACTION, SKIN_WIDTH_FRACTION, SKIN_X_FRACTION, SKIN_Y_FRACTION,
};
use crate::io::error::{AvatarError, Result};
use ndarray::{Axis, Slice};
use std::fmt;

/// Facial feature a region is expected to cover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Band across the top of the photo
    Hair,
    /// Central face box
    Skin,
    /// Small box where the left eye usually sits
    LeftEye,
    /// Small box where the right eye usually sits
    RightEye,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Hair => "hair",
            Self::Skin => "skin",
            Self::LeftEye => "left eye",
            Self::RightEye => "right eye",
        };
        f.write_str(name)
    }
}

/// Pixel rectangle within a normalized image
///
/// The origin is signed because eye boxes are positioned by their center and
/// can start left of the image on degenerate widths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Feature this region samples
    pub kind: RegionKind,
    /// Left edge in pixels
    pub x: i64,
    /// Top edge in pixels
    pub y: i64,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Region {
    /// Create a region
    pub const fn new(kind: RegionKind, x: i64, y: i64, width: u32, height: u32) -> Self {
        Self {
            kind,
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Whether the region is non-empty and lies entirely inside a `width` x `height` raster
    pub const fn fits_within(&self, width: u32, height: u32) -> bool {
        self.width > 0
            && self.height > 0
            && self.x >= 0
            && self.y >= 0
            && self.x + self.width as i64 <= width as i64
            && self.y + self.height as i64 <= height as i64
    }
}

/// The four regions sampled from one normalized image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionLayout {
    /// Top band
    pub hair: Region,
    /// Central face box
    pub skin: Region,
    /// Left eye box
    pub left_eye: Region,
    /// Right eye box
    pub right_eye: Region,
}

impl RegionLayout {
    /// Compute region geometry for a normalized image of the given size
    ///
    /// Every coordinate is rounded to the nearest pixel independently, so the
    /// eye boxes are offset by the rounded half box from their rounded centers
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        let w = f64::from(width);
        let h = f64::from(height);

        let hair_height = round_px(h * HAIR_HEIGHT_FRACTION).max(MIN_HAIR_HEIGHT);
        let hair = Region::new(
            RegionKind::Hair,
            round_px(w * HAIR_X_FRACTION),
            0,
            extent(round_px(w * HAIR_WIDTH_FRACTION)),
            extent(hair_height),
        );

        let skin = Region::new(
            RegionKind::Skin,
            round_px(w * SKIN_X_FRACTION),
            round_px(h * SKIN_Y_FRACTION),
            extent(round_px(w * SKIN_WIDTH_FRACTION)),
            extent(round_px(h * SKIN_HEIGHT_FRACTION)),
        );

        let eye_box = round_px(w.min(h) * EYE_BOX_FRACTION).max(MIN_EYE_BOX);
        let half_box = round_px(eye_box as f64 / 2.0);
        let eye_y = round_px(h * EYE_Y_FRACTION);
        let eye = |kind, center: f64| {
            Region::new(
                kind,
                round_px(w * center) - half_box,
                eye_y,
                extent(eye_box),
                extent(eye_box),
            )
        };

        Self {
            hair,
            skin,
            left_eye: eye(RegionKind::LeftEye, LEFT_EYE_CENTER_FRACTION),
            right_eye: eye(RegionKind::RightEye, RIGHT_EYE_CENTER_FRACTION),
        }
    }

    /// Regions in sampling order
    pub const fn regions(&self) -> [Region; 4] {
        [self.hair, self.skin, self.left_eye, self.right_eye]
    }
}

fn round_px(value: f64) -> i64 {
    value.round() as i64
}

fn extent(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Mean red, green and blue over every pixel of `region`
///
/// # Errors
///
/// Returns `RegionOutOfBounds` if the region is empty or not fully inside the image
pub fn sample_region(image: &NormalizedImage, region: &Region) -> Result<RgbSample> {
    let (image_width, image_height) = (image.width(), image.height());
    if !region.fits_within(image_width, image_height) {
        return Err(AvatarError::RegionOutOfBounds {
            region: *region,
            image_width,
            image_height,
        });
    }

    let (x, y) = (region.x as usize, region.y as usize);
    let (w, h) = (region.width as usize, region.height as usize);
    let window = image
        .pixels()
        .slice_axis_move(Axis(0), Slice::from(y..y + h))
        .slice_axis_move(Axis(1), Slice::from(x..x + w));

    let channel_mean = |channel: usize| {
        let total: u64 = window
            .index_axis(Axis(2), channel)
            .iter()
            .map(|&value| u64::from(value))
            .sum();
        total as f64 / region.area() as f64
    };

    Ok(RgbSample::new(
        channel_mean(0),
        channel_mean(1),
        channel_mean(2),
    ))
}
