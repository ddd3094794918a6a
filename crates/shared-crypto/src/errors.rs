//! Crypto error types.

use shared_types::CodecError;
use thiserror::Error;

/// Errors raised by key construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Bytes do not describe a point on secp256k1
    #[error("Invalid public key")]
    InvalidPublicKey,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Text is not valid hexadecimal
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Wire-level failure while reading a key
    #[error(transparent)]
    Codec(#[from] CodecError),
}
