//! JSON feature reports written beside each processed photo

use crate::avatar::features::FeatureRecord;
use crate::io::error::{AvatarError, Result};
use std::path::Path;

/// Serialize a feature record as pretty-printed JSON
///
/// # Errors
///
/// Returns `Serialization` if the record cannot be encoded
pub fn report_json(record: &FeatureRecord, path: &Path) -> Result<String> {
    serde_json::to_string_pretty(record).map_err(|e| AvatarError::Serialization {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write the feature report for `record` to `path`
///
/// # Errors
///
/// Returns an error if:
/// - The record cannot be serialized
/// - The parent directory cannot be created
/// - The file cannot be written
pub fn write_report(record: &FeatureRecord, path: &Path) -> Result<()> {
    let json = report_json(record, path)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AvatarError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(path, json).map_err(|e| AvatarError::FileSystem {
        path: path.to_path_buf(),
        operation: "write report",
        source: e,
    })
}
