//! # Error Types
//!
//! Defines error types shared by every crate that reads the wire format.

use thiserror::Error;

/// Errors raised while reading the canonical wire encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Input ended before a complete value was read.
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// A compact size used a wider form than its value requires.
    #[error("Non-canonical compact size: {0}")]
    NonCanonicalCompactSize(u64),

    /// A compact size exceeded `MAX_COMPACT_SIZE`.
    #[error("Compact size too large: {0}")]
    CompactSizeTooLarge(u64),

    /// A VARINT does not fit in 64 bits.
    #[error("VARINT overflows u64")]
    VarIntOverflow,

    /// A decoded integer does not fit the field it is read into.
    #[error("Value {value} out of range for {target}")]
    ValueOutOfRange { target: &'static str, value: u64 },

    /// Bytes left over after a value that must span the whole input.
    #[error("Trailing bytes after value: {0}")]
    TrailingBytes(usize),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_error_display() {
        let err = CodecError::UnexpectedEof {
            needed: 20,
            remaining: 3,
        };
        assert!(err.to_string().contains("20"));
        assert!(err.to_string().contains("3"));
    }
}
