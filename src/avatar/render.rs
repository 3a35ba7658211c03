//! SVG rendering of a feature record

use crate::avatar::features::{EyeShape, FeatureRecord, HairStyle};
use crate::io::configuration::AVATAR_SIZE;
use crate::io::error::{AvatarError, Result};
use std::path::Path;
use svg::Document;
use svg::node::element::{Circle, Ellipse, Rectangle};

const FACE_RADIUS: u32 = 80;
const EYE_RADIUS: u32 = 10;
const EYE_CENTERS: [(u32, u32); 2] = [(70, 100), (130, 100)];
// Almond eyes keep roughly the round eye's area
const ALMOND_RADII: (u32, u32) = (12, 6);

/// Build the avatar document: face, hair shape, then both eyes
pub fn render_avatar(record: &FeatureRecord) -> Document {
    let center = AVATAR_SIZE / 2;
    let face = Circle::new()
        .set("cx", center)
        .set("cy", center)
        .set("r", FACE_RADIUS)
        .set("fill", record.skin_tone.to_string());

    let document = Document::new()
        .set("width", AVATAR_SIZE)
        .set("height", AVATAR_SIZE)
        .set("viewBox", (0, 0, AVATAR_SIZE, AVATAR_SIZE))
        .add(face);

    let hair_fill = record.hair_color.to_string();
    let document = match record.hair_style {
        HairStyle::Short => document.add(
            Rectangle::new()
                .set("x", 20)
                .set("y", 20)
                .set("width", 160)
                .set("height", 40)
                .set("fill", hair_fill),
        ),
        HairStyle::Long => document.add(
            Rectangle::new()
                .set("x", 10)
                .set("y", 20)
                .set("width", 180)
                .set("height", 100)
                .set("fill", hair_fill),
        ),
        HairStyle::Curly => document.add(
            Circle::new()
                .set("cx", center)
                .set("cy", 40)
                .set("r", 60)
                .set("fill", hair_fill),
        ),
    };

    let eye_fill = record.eye_color.to_string();
    EYE_CENTERS
        .iter()
        .fold(document, |doc, &(cx, cy)| match record.eye_shape {
            EyeShape::Round => doc.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", EYE_RADIUS)
                    .set("fill", eye_fill.clone()),
            ),
            EyeShape::Almond => doc.add(
                Ellipse::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("rx", ALMOND_RADII.0)
                    .set("ry", ALMOND_RADII.1)
                    .set("fill", eye_fill.clone()),
            ),
        })
}

/// Render `record` and write it as an SVG file, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn save_avatar(record: &FeatureRecord, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AvatarError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    svg::save(output_path, &render_avatar(record)).map_err(|e| AvatarError::AvatarExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
