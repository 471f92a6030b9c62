//! Error types for lzwpack

use std::io;
use thiserror::Error;

/// Main error type for lzwpack operations
#[derive(Debug, Error)]
pub enum LzwError {
    /// IO error occurred during file or stream operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The dictionary would grow past the one-byte code space
    #[error("dictionary full: the one-byte code width allows at most 254 entries")]
    CapacityExceeded,

    /// A code in the compressed stream cannot be resolved
    #[error("invalid code in compressed stream: {0}")]
    InvalidCode(u8),

    /// An input character falls outside the initial alphabet
    #[error("unsupported character {0:?}: only ASCII 32-126 can be encoded")]
    UnsupportedCharacter(char),
}

/// Result type alias for lzwpack operations
pub type Result<T> = std::result::Result<T, LzwError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LzwError::InvalidCode(200);
        assert_eq!(err.to_string(), "invalid code in compressed stream: 200");
    }

    #[test]
    fn test_capacity_error_names_limit() {
        let err = LzwError::CapacityExceeded;
        assert!(err.to_string().contains("254"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let lzw_err: LzwError = io_err.into();
        assert!(matches!(lzw_err, LzwError::Io(_)));
    }
}
