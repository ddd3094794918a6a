//! # Key Hash Identifier
//!
//! A `KeyId` is the 20-byte hash of an account's public key: the last 20
//! bytes of Keccak-256 over the uncompressed point without its `0x04`
//! prefix (Ethereum-style address derivation).

use crate::hashing::keccak256;
use crate::CryptoError;
use k256::ecdsa::VerifyingKey;
use shared_types::{Address, CodecError, Decodable, Encodable, WireReader, WireWriter};
use std::fmt;
use std::str::FromStr;

/// Serialized size of a [`KeyId`].
pub const KEY_ID_SIZE: usize = 20;

/// Hash of a public key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyId(Address);

impl KeyId {
    /// Wrap raw hash bytes.
    pub const fn new(bytes: Address) -> Self {
        Self(bytes)
    }

    /// Create from a slice of exactly 20 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        let array: Address = bytes
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength {
                expected: KEY_ID_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }

    /// Derive from a verified public key.
    pub fn from_verifying_key(key: &VerifyingKey) -> Self {
        let point = key.to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);

        let mut address = [0u8; KEY_ID_SIZE];
        address.copy_from_slice(&hash[12..]);
        Self(address)
    }

    /// Raw hash bytes.
    pub fn as_bytes(&self) -> &Address {
        &self.0
    }

    /// The all-zero hash marks "no key".
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; KEY_ID_SIZE]
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for KeyId {
    type Err = CryptoError;

    /// Parse `0x` followed by 40 hex digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| CryptoError::InvalidHex(format!("missing 0x prefix: {}", s)))?;
        if digits.len() != KEY_ID_SIZE * 2 {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_ID_SIZE,
                actual: digits.len() / 2,
            });
        }
        let bytes = hex::decode(digits).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl Encodable for KeyId {
    fn encoded_size(&self) -> usize {
        KEY_ID_SIZE
    }

    fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_bytes(&self.0);
    }
}

impl Decodable for KeyId {
    type Error = CodecError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        Ok(Self(reader.read_array()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_parse() {
        let id = KeyId::new([0xAB; 20]);
        let text = id.to_string();
        assert_eq!(text, format!("0x{}", "ab".repeat(20)));
        assert_eq!(text.parse::<KeyId>().unwrap(), id);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("ab".repeat(20).parse::<KeyId>().is_err());
        assert!("0x1234".parse::<KeyId>().is_err());
        assert!(format!("0x{}", "zz".repeat(20)).parse::<KeyId>().is_err());
    }

    #[test]
    fn test_empty() {
        assert!(KeyId::default().is_empty());
        assert!(!KeyId::new([1; 20]).is_empty());
    }

    #[test]
    fn test_wire_form_is_raw_bytes() {
        let id = KeyId::new([7; 20]);
        let bytes = id.encode();
        assert_eq!(bytes, vec![7; 20]);
        assert_eq!(KeyId::decode(&bytes).unwrap(), id);
    }

    #[test]
    fn test_from_slice_length() {
        assert_eq!(
            KeyId::from_slice(&[0; 19]),
            Err(CryptoError::InvalidKeyLength {
                expected: 20,
                actual: 19
            })
        );
    }
}
