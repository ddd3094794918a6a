//! # Domain Errors
//!
//! Error types for the Account Identity subsystem.
//!
//! Three failure classes are kept apart:
//!
//! - [`DecodeError`]: untrusted wire input is unreadable. Fatal for the
//!   enclosing transaction because the tag also fixes how many bytes follow.
//! - [`ParseError`]: a human-entered string is malformed. Recoverable.
//! - [`ResolveError`]: an identifier cannot be mapped to an account key.
//!   Recoverable and never replaced by a default identifier.
//!
//! Encode-time size violations are not errors at all; they panic, since
//! they can only come from a corrupted in-memory value.

use crate::ports::LookupError;
use shared_crypto::CryptoError;
use shared_types::CodecError;
use thiserror::Error;

/// Errors raised while decoding an identifier from the wire.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Leading tag matches no identifier kind.
    #[error("Unknown identifier tag: {tag}")]
    UnknownTag { tag: u64 },

    /// Registration id payload did not span exactly the declared length.
    #[error("Registration id length mismatch: tag declares {declared} bytes, payload used {consumed}")]
    RegIdLengthMismatch { declared: usize, consumed: usize },

    /// Input truncated or otherwise unreadable.
    #[error(transparent)]
    Codec(#[from] CodecError),
}

/// Errors raised while parsing an identifier from text or raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty identifier")]
    Empty,

    #[error("Malformed registration id: {input:?}")]
    MalformedRegId { input: String },

    #[error("Registration id component out of range: {input:?}")]
    RegIdOutOfRange { input: String },

    #[error("Invalid raw registration id ({len} bytes)")]
    InvalidRawRegId { len: usize },

    #[error("Nickname too long: {len} characters (max {max})")]
    NicknameTooLong { len: usize, max: usize },

    #[error("Invalid nickname character {ch:?} at position {position}")]
    InvalidNicknameChar { ch: char, position: usize },

    #[error("Nickname must not end with '.'")]
    NicknameTrailingDot,

    #[error("Unrecognized identifier: {input:?}")]
    Unrecognized { input: String },

    #[error("Unknown identifier type: {name:?}")]
    UnknownIdType { name: String },

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

/// Errors raised while resolving an identifier to its account key hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Null identifier does not reference an account")]
    NullIdentifier,

    #[error("Account not found: {id}")]
    AccountNotFound { id: String },

    #[error("Public key is not a valid curve point")]
    InvalidPublicKey,

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Any failure surfaced by the Account Identity service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("Decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("Parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("Resolve failed: {0}")]
    Resolve(#[from] ResolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnknownTag { tag: 99 };
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let err: DecodeError = CodecError::TrailingBytes(3).into();
        assert_eq!(err.to_string(), CodecError::TrailingBytes(3).to_string());
    }

    #[test]
    fn test_identity_error_wraps_classes() {
        let err: IdentityError = ParseError::Empty.into();
        assert!(matches!(err, IdentityError::Parse(ParseError::Empty)));

        let err: IdentityError = ResolveError::NullIdentifier.into();
        assert!(err.to_string().starts_with("Resolve failed"));
    }
}
