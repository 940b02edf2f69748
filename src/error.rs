//! Error types for the pagination service

use thiserror::Error;

/// Result type alias for rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a pagination image
#[derive(Error, Debug)]
pub enum Error {
    /// Requested page number is not a positive integer
    #[error("Page number must be greater than 0, got {0}")]
    InvalidPage(i64),

    /// Unexpected failure while drawing or encoding the image
    #[error("Rendering failed: {0}")]
    Render(String),
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::Render(err.to_string())
    }
}
