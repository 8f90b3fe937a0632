//! Error types for the icon codec.

use std::fmt;

/// Error variants for packing, unpacking, and descriptor construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested bits-per-pixel width is not one of 1, 2, 4 or 8.
    InvalidWidth(u8),
    /// A code was requested from an empty or exhausted packed buffer.
    BufferUnderrun,
    /// Packed buffer length does not match the dimensions and bit width.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidWidth(bits) => {
                write!(f, "Invalid bits per pixel {}: use 1, 2, 4 or 8", bits)
            }
            Error::BufferUnderrun => write!(f, "Packed buffer exhausted"),
            Error::SizeMismatch { expected, actual } => {
                write!(
                    f,
                    "Packed buffer size mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// A specialized Result type for icon codec operations.
pub type Result<T> = std::result::Result<T, Error>;
