//! Error type definitions for signature operations

use thiserror::Error;

/// Primary error type for gostec operations
///
/// Each variant is an error *kind*; the `context` names the operation that
/// failed and `message` carries human-readable detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required buffer was missing or empty
    #[error("{context}: invalid argument: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// A hash, signature or key buffer does not match the configured key size
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The requested key size is not supported
    #[error("invalid key size: {bits} bits (supported: 256, 512)")]
    InvalidKeySize { bits: usize },

    /// Key material is present but unusable for the requested operation
    #[error("{context}: invalid key: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Malformed XML or decimal text while decoding
    #[error("{context}: format error: {message}")]
    Format {
        context: &'static str,
        message: String,
    },

    /// The engine has already been disposed
    #[error("{context}: object has been disposed")]
    Disposed { context: &'static str },

    /// The random source failed to produce bytes
    #[error("{context}: random generation failed: {message}")]
    RandomGeneration {
        context: &'static str,
        message: String,
    },
}

/// Result type for gostec operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidArgument` error
    pub fn argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidKey` error
    pub fn key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `Format` error
    pub fn format(context: &'static str, message: impl Into<String>) -> Self {
        Self::Format {
            context,
            message: message.into(),
        }
    }

    /// Whether this error reports a size mismatch
    pub fn is_size_error(&self) -> bool {
        matches!(self, Self::InvalidLength { .. } | Self::InvalidKeySize { .. })
    }
}
