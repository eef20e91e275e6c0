use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user while loading, saving or configuring the canvas
#[derive(Debug, Error)]
pub enum PaintError {
    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A decode of this path already failed; `reason` is that failure
    #[error("Image {path} is unavailable: {reason}")]
    Unavailable { path: PathBuf, reason: String },

    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for canvas operations
pub type PaintResult<T> = Result<T, PaintError>;
