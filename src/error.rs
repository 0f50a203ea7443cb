//! Unified error types for the signer
//!
//! Every fallible operation returns a `SignerError`. Errors are plain values:
//! nothing in the core prints them, callers decide how to surface them.

use serde::{Deserialize, Serialize};

/// Main error type for all signing and derivation operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignerError {
    /// Input would not fit in the fixed working buffer
    #[error("Length exceeded: {len} bytes does not fit in {capacity}")]
    LengthExceeded { len: usize, capacity: usize },

    /// Scheme byte is not implemented or not recognised
    #[error("Unsupported signature scheme: 0x{0:02x}")]
    UnsupportedScheme(u8),

    /// Failure reported by the hash, MAC or Ed25519 primitives
    #[error("Primitive failure: {0}")]
    Primitive(String),

    /// Malformed caller input (hex, paths, mnemonics, config files)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SignerError {
    // Convenience constructors
    pub fn length_exceeded(len: usize, capacity: usize) -> Self {
        Self::LengthExceeded { len, capacity }
    }

    pub fn primitive(msg: impl Into<String>) -> Self {
        Self::Primitive(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Category of this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::LengthExceeded { .. } => ErrorCode::LengthExceeded,
            Self::UnsupportedScheme(_) => ErrorCode::UnsupportedScheme,
            Self::Primitive(_) => ErrorCode::PrimitiveFailure,
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
        }
    }
}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    LengthExceeded,
    UnsupportedScheme,
    PrimitiveFailure,
    InvalidInput,
}

impl ErrorCode {
    /// Negative status returned across the C ABI
    pub fn status(self) -> i32 {
        match self {
            Self::UnsupportedScheme => -1,
            Self::LengthExceeded => -2,
            Self::PrimitiveFailure => -3,
            Self::InvalidInput => -4,
        }
    }
}

/// Result type alias for signer operations
pub type SignerResult<T> = Result<T, SignerError>;

// Conversions from common error types

impl From<hex::FromHexError> for SignerError {
    fn from(e: hex::FromHexError) -> Self {
        SignerError::InvalidInput(format!("hex: {}", e))
    }
}

impl From<base64::DecodeError> for SignerError {
    fn from(e: base64::DecodeError) -> Self {
        SignerError::InvalidInput(format!("base64: {}", e))
    }
}

impl From<serde_json::Error> for SignerError {
    fn from(e: serde_json::Error) -> Self {
        SignerError::InvalidInput(format!("json: {}", e))
    }
}
