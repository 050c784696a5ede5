//! Custom error types for linearization

use std::fmt;
use std::io;

/// Linearization error types
#[derive(Debug)]
pub enum LinearizeError {
    /// I/O error
    IoError(io::Error),
    /// Error reported by the image codec
    ImageError(image::ImageError),
    /// Source row length does not match the requested destination size
    DimensionMismatch { expected: u64, actual: u64 },
    /// Pixel count does not fit in a single image row
    DimensionOverflow { width: u32, height: u32 },
    /// Source image is expected to be a single row
    NotARow(u32),
    /// Pixel layout the traversal cannot copy
    UnsupportedPixelType(String),
    /// No linearizer registered under this name
    UnknownAlgorithm(String),
    /// Bad argument supplied by the caller
    InvalidArgument(String),
    /// Settings file could not be read or parsed
    ConfigError(String),
}

impl fmt::Display for LinearizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinearizeError::IoError(e) => write!(f, "I/O error: {}", e),
            LinearizeError::ImageError(e) => write!(f, "Image error: {}", e),
            LinearizeError::DimensionMismatch { expected, actual } => write!(
                f,
                "Row has {} pixels but the destination size needs {}",
                actual, expected
            ),
            LinearizeError::DimensionOverflow { width, height } => write!(
                f,
                "Image of {}x{} pixels is too large to fit in a single row",
                width, height
            ),
            LinearizeError::NotARow(height) => {
                write!(f, "Expected a single-row image, got height {}", height)
            }
            LinearizeError::UnsupportedPixelType(t) => write!(f, "Unsupported pixel type: {}", t),
            LinearizeError::UnknownAlgorithm(name) => write!(f, "Invalid algorithm: {}", name),
            LinearizeError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            LinearizeError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for LinearizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LinearizeError::IoError(e) => Some(e),
            LinearizeError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for LinearizeError {
    fn from(error: io::Error) -> Self {
        LinearizeError::IoError(error)
    }
}

impl From<image::ImageError> for LinearizeError {
    fn from(error: image::ImageError) -> Self {
        LinearizeError::ImageError(error)
    }
}

/// Result type for linearization operations
pub type LinearizeResult<T> = Result<T, LinearizeError>;
