//! Error types and path context for extraction and avatar output

use crate::extraction::region::Region;
use std::fmt;
use std::path::{Path, PathBuf};

/// Placeholder path used for images decoded straight from memory
pub const MEMORY_SOURCE: &str = "<memory>";

/// Main error type for all extraction and rendering operations
#[derive(Debug)]
pub enum AvatarError {
    /// Source image could not be decoded
    ///
    /// Covers corrupt data, unsupported formats and zero-sized images
    Decode {
        /// Path of the image, or `<memory>` for in-memory buffers
        path: PathBuf,
        /// Underlying decoder error
        source: image::ImageError,
    },

    /// A sampling region does not fit inside the normalized raster
    ///
    /// Only reachable with pathological aspect ratios, where the normalized
    /// height is too small for the fixed region minimums
    RegionOutOfBounds {
        /// The region that was rejected
        region: Region,
        /// Width of the normalized raster
        image_width: u32,
        /// Height of the normalized raster
        image_height: u32,
    },

    /// Text could not be parsed as a `#rrggbb` color
    InvalidColor {
        /// The rejected input
        value: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Feature report could not be serialized
    Serialization {
        /// Destination of the report
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to write the rendered avatar
    AvatarExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Internal computation produced an inconsistent result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for AvatarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode { path, source } => {
                write!(f, "Failed to decode image '{}': {source}", path.display())
            }
            Self::RegionOutOfBounds {
                region,
                image_width,
                image_height,
            } => {
                write!(
                    f,
                    "{} region {}x{} at ({}, {}) lies outside the {image_width}x{image_height} image",
                    region.kind, region.width, region.height, region.x, region.y
                )
            }
            Self::InvalidColor { value } => {
                write!(f, "Invalid color '{value}': expected #rrggbb")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to serialize report for '{}': {source}",
                    path.display()
                )
            }
            Self::AvatarExport { path, source } => {
                write!(
                    f,
                    "Failed to export avatar to '{}': {source}",
                    path.display()
                )
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
        }
    }
}

impl std::error::Error for AvatarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::FileSystem { source, .. } | Self::AvatarExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl AvatarError {
    /// Whether this error ends a single extraction without affecting others
    ///
    /// Callers keep their previous feature state when this returns true
    pub const fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::Decode { .. } | Self::RegionOutOfBounds { .. })
    }

    /// Short notice suitable for showing to the person who supplied the photo
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode { .. } => {
                "Couldn't read that image. Please try another photo.".to_string()
            }
            Self::RegionOutOfBounds { .. } => {
                "That image is too narrow to sample. Please use a taller photo.".to_string()
            }
            Self::InvalidColor { value } => {
                format!("'{value}' is not a color. Use the form #rrggbb.")
            }
            _ => self.to_string(),
        }
    }
}

/// Convenience type alias for avatar results
pub type Result<T> = std::result::Result<T, AvatarError>;

/// Attaches the originating file path to errors raised without one
pub trait WithPath<T> {
    /// Replace placeholder paths in the error with `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<AvatarError>,
{
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only path-carrying variants are rewritten
            match &mut error {
                AvatarError::Decode { path: slot, .. }
                | AvatarError::FileSystem { path: slot, .. } => {
                    *slot = path.to_path_buf();
                }
                _ => {}
            }
            error
        })
    }
}

impl From<image::ImageError> for AvatarError {
    fn from(err: image::ImageError) -> Self {
        Self::Decode {
            path: PathBuf::from(MEMORY_SOURCE),
            source: err,
        }
    }
}

impl From<std::io::Error> for AvatarError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AvatarError {
    AvatarError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> AvatarError {
    AvatarError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
