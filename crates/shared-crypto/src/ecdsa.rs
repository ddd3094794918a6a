//! # secp256k1 Public Keys
//!
//! SEC1-encoded secp256k1 public keys as carried by transactions.
//!
//! ## Wire Form
//!
//! A compact-size length followed by the key bytes: 33 for a compressed
//! key, 65 for an uncompressed one, 0 for "no key". The length byte of a
//! compressed key is therefore always `0x21`.

use crate::{CryptoError, KeyId};
use k256::ecdsa::{SigningKey, VerifyingKey};
use shared_types::{compact_size_len, CodecError, Decodable, Encodable, WireReader, WireWriter};
use std::fmt;
use std::str::FromStr;

/// Length of a compressed SEC1 public key.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Length of an uncompressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = 65;

/// secp256k1 public key in SEC1 form.
///
/// Bytes read off the wire are kept as-is; [`PubKey::is_fully_valid`]
/// checks that they describe a curve point.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PubKey {
    bytes: Vec<u8>,
}

impl PubKey {
    /// Create from SEC1 bytes, validating the point.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != COMPRESSED_PUBLIC_KEY_SIZE && bytes.len() != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: COMPRESSED_PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            });
        }
        VerifyingKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Wrap bytes without validating them.
    pub fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read a key whose compact-size length prefix was already consumed.
    pub fn decode_payload(reader: &mut WireReader<'_>, len: usize) -> Result<Self, CodecError> {
        Ok(Self {
            bytes: reader.read_slice(len)?.to_vec(),
        })
    }

    /// SEC1 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of SEC1 bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A key with no bytes stands for "no key".
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Whether the key is in 33-byte compressed form.
    pub fn is_compressed(&self) -> bool {
        self.bytes.len() == COMPRESSED_PUBLIC_KEY_SIZE
    }

    /// Whether the bytes describe a point on the curve.
    pub fn is_fully_valid(&self) -> bool {
        self.verifying_key().is_ok()
    }

    fn verifying_key(&self) -> Result<VerifyingKey, CryptoError> {
        VerifyingKey::from_sec1_bytes(&self.bytes).map_err(|_| CryptoError::InvalidPublicKey)
    }

    /// The same point in 33-byte compressed form.
    pub fn compressed(&self) -> Result<Self, CryptoError> {
        let point = self.verifying_key()?.to_encoded_point(true);
        Ok(Self::from_bytes_unchecked(point.as_bytes().to_vec()))
    }

    /// Hash of this key.
    pub fn key_id(&self) -> Result<KeyId, CryptoError> {
        Ok(KeyId::from_verifying_key(&self.verifying_key()?))
    }
}

impl fmt::Display for PubKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.bytes))
    }
}

impl FromStr for PubKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|e| CryptoError::InvalidHex(e.to_string()))?;
        Self::from_slice(&bytes)
    }
}

impl Encodable for PubKey {
    fn encoded_size(&self) -> usize {
        compact_size_len(self.bytes.len() as u64) + self.bytes.len()
    }

    fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_compact_size(self.bytes.len() as u64);
        writer.write_bytes(&self.bytes);
    }
}

impl Decodable for PubKey {
    type Error = CryptoError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        let len = reader.read_compact_size()? as usize;
        if len != 0 && len != COMPRESSED_PUBLIC_KEY_SIZE && len != PUBLIC_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: COMPRESSED_PUBLIC_KEY_SIZE,
                actual: len,
            });
        }
        Ok(Self::decode_payload(reader, len)?)
    }
}

/// secp256k1 keypair used to derive account keys.
pub struct Secp256k1KeyPair {
    signing_key: SigningKey,
}

impl Secp256k1KeyPair {
    /// Create from secret key bytes (32 bytes).
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        let signing_key =
            SigningKey::from_bytes((&bytes).into()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { signing_key })
    }

    /// Compressed public key (33 bytes).
    pub fn public_key(&self) -> PubKey {
        self.encode_public_key(true)
    }

    /// Uncompressed public key (65 bytes).
    pub fn public_key_uncompressed(&self) -> PubKey {
        self.encode_public_key(false)
    }

    fn encode_public_key(&self, compress: bool) -> PubKey {
        let point = self.signing_key.verifying_key().to_encoded_point(compress);
        PubKey::from_bytes_unchecked(point.as_bytes().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypair(seed: u8) -> Secp256k1KeyPair {
        Secp256k1KeyPair::from_bytes([seed; 32]).unwrap()
    }

    #[test]
    fn test_compressed_key_shape() {
        let key = keypair(0xAB).public_key();
        assert_eq!(key.len(), COMPRESSED_PUBLIC_KEY_SIZE);
        assert!(key.is_compressed());
        assert!(key.is_fully_valid());
        assert!(matches!(key.as_bytes()[0], 0x02 | 0x03));
    }

    #[test]
    fn test_key_id_independent_of_compression() {
        let pair = keypair(0x11);
        assert_eq!(
            pair.public_key().key_id().unwrap(),
            pair.public_key_uncompressed().key_id().unwrap()
        );
    }

    #[test]
    fn test_compressed_form() {
        let pair = keypair(0x44);
        let compressed = pair.public_key_uncompressed().compressed().unwrap();
        assert_eq!(compressed, pair.public_key());
        assert_eq!(pair.public_key().compressed().unwrap(), pair.public_key());
        assert_eq!(
            PubKey::from_bytes_unchecked(vec![0x04; 65]).compressed(),
            Err(CryptoError::InvalidPublicKey)
        );
    }

    #[test]
    fn test_from_slice_rejects_off_curve() {
        let mut bytes = [0xFFu8; 33];
        bytes[0] = 0x02;
        assert_eq!(PubKey::from_slice(&bytes), Err(CryptoError::InvalidPublicKey));
        assert!(matches!(
            PubKey::from_slice(&[0x02; 20]),
            Err(CryptoError::InvalidKeyLength { .. })
        ));
    }

    #[test]
    fn test_wire_form_has_length_prefix() {
        let key = keypair(0x22).public_key();
        let bytes = key.encode();
        assert_eq!(bytes.len(), 34);
        assert_eq!(bytes[0], 33);
        assert_eq!(key.encoded_size(), 34);
        assert_eq!(PubKey::decode(&bytes).unwrap(), key);
    }

    #[test]
    fn test_empty_key_wire_form() {
        let key = PubKey::default();
        assert_eq!(key.encode(), vec![0]);
        assert_eq!(PubKey::decode(&[0]).unwrap(), key);
    }

    #[test]
    fn test_decode_rejects_odd_length() {
        assert!(matches!(
            PubKey::decode(&[5, 1, 2, 3, 4, 5]),
            Err(CryptoError::InvalidKeyLength { actual: 5, .. })
        ));
    }

    #[test]
    fn test_hex_round_trip() {
        let key = keypair(0x33).public_key();
        assert_eq!(key.to_string().parse::<PubKey>().unwrap(), key);
    }
}
