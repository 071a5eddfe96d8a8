//! Error types for icon rendering

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors that can occur while building or writing an icon
#[derive(Error, Debug)]
pub enum IconError {
    /// A colour, size or palette that can never produce a valid icon
    #[error("Invalid icon spec: {0}")]
    InvalidSpec(String),

    /// A shape could not be turned into a path (zero-sized or non-finite)
    #[error("Degenerate geometry: {0}")]
    Geometry(String),

    /// The output file could not be created or written
    #[error("Can't write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the image
    #[error("Failed to encode PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Contents.json serialization failed
    #[error("Failed to serialize Contents.json: {0}")]
    Json(#[from] serde_json::Error),
}
