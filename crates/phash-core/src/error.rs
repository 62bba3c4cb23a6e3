use thiserror::Error;

use crate::hash::Algorithm;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the phash library
#[derive(Error, Debug)]
pub enum Error {
    /// Requested bit budget exceeds 64 bits, or size is outside the algorithm's range
    #[error("Invalid size for {algorithm} hash: {reason}")]
    Size {
        algorithm: Algorithm,
        reason: String,
    },

    /// Comparison between hashes produced by different algorithms
    #[error("Cannot compare a {left} hash with a {right} hash")]
    Mismatch { left: Algorithm, right: Algorithm },

    /// Bit index outside [0, 63]
    #[error("Bit index {0} out of range [0, 63]")]
    Index(usize),

    /// Malformed hex string, byte buffer or algorithm name
    #[error("Format error: {0}")]
    Format(String),

    /// Grid handed to an algorithm does not have the dimensions it requires
    #[error("Grid dimension mismatch: expected {expected:?}, got {actual:?}")]
    GridDimensions {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    /// I/O operation error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    /// Invalid configuration error
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn size(algorithm: Algorithm, reason: impl Into<String>) -> Self {
        Error::Size {
            algorithm,
            reason: reason.into(),
        }
    }
}
