//! Error types for binstr operations.
//!
//! A single error enum covers the four failure classes of the library:
//! programmer errors (invalid arguments, use of a released builder),
//! input-driven decode failures, and operations a codec does not offer.

use std::io;
use thiserror::Error;

/// The main error type for binstr operations.
#[derive(Debug, Error)]
pub enum BinStrError {
    /// An argument was outside its permitted range (bit counts, alphabet size).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the bad argument.
        message: String,
    },

    /// Encoded text does not conform to the codec's grammar.
    #[error("Format error: {message}")]
    Format {
        /// Description of the offending condition.
        message: String,
    },

    /// The requested operation is not offered by this component.
    #[error("Not supported: {operation}")]
    NotSupported {
        /// The unsupported operation.
        operation: String,
    },

    /// A builder was used after it had been released.
    #[error("Builder has already been released")]
    AlreadyReleased,

    /// A bit writer held a partial byte and the uneven mode disallows it.
    #[error("Uneven bit count: {bits} bits written is not a multiple of 8")]
    UnevenBits {
        /// Total number of bits written.
        bits: u64,
    },

    /// I/O error from an underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for binstr operations.
pub type Result<T> = std::result::Result<T, BinStrError>;

impl BinStrError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a not supported error.
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
        }
    }

    /// Create an uneven bit count error.
    pub fn uneven_bits(bits: u64) -> Self {
        Self::UnevenBits { bits }
    }

    /// Whether the caller can reasonably retry with corrected input.
    ///
    /// Only decode-time format errors are input driven; everything else
    /// indicates a programming mistake or an environment failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BinStrError::invalid_argument("bit count 33 out of range");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("33"));

        let err = BinStrError::format("invalid character '!'");
        assert!(err.to_string().contains("Format error"));

        let err = BinStrError::not_supported("quoted-printable decode");
        assert!(err.to_string().contains("quoted-printable decode"));

        let err = BinStrError::uneven_bits(4);
        assert!(err.to_string().contains("4 bits"));

        assert!(BinStrError::AlreadyReleased.to_string().contains("released"));
    }

    #[test]
    fn test_recoverable() {
        assert!(BinStrError::format("bad").is_recoverable());
        assert!(!BinStrError::invalid_argument("bad").is_recoverable());
        assert!(!BinStrError::not_supported("decode").is_recoverable());
        assert!(!BinStrError::AlreadyReleased.is_recoverable());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: BinStrError = io_err.into();
        assert!(matches!(err, BinStrError::Io(_)));
    }
}
