//! # Registration Identifier
//!
//! An account's registration id is the position of its registration
//! transaction: `(block height, index within block)`. It is the shortest
//! way to reference an account on the wire (2 to 8 bytes).
//!
//! ## Forms
//!
//! | Form | Layout |
//! |------|--------|
//! | wire | VARINT(height) VARINT(index) |
//! | packed raw | height u32 LE, index u16 LE (6 bytes) |
//! | storage key | height u32 BE, index u16 BE (6 bytes, sorts like `RegId`) |
//! | string | `"<height>-<index>"` or 12 hex digits of the packed form |

use super::{MaturityConfig, ParseError, ResolveError};
use crate::ports::AccountLookup;
use shared_crypto::KeyId;
use shared_types::{
    varint_len, BlockHeight, CodecError, Decodable, Encodable, TxIndex, WireReader, WireWriter,
};
use std::fmt;
use std::str::FromStr;

/// Size of the packed raw form.
pub const REG_ID_RAW_SIZE: usize = 6;

/// Smallest wire payload: two single-byte VARINTs.
pub const MIN_REG_ID_PAYLOAD: usize = 2;

/// Largest wire payload: 5-byte height VARINT plus 3-byte index VARINT.
pub const MAX_REG_ID_PAYLOAD: usize = 8;

/// Most decimal digits accepted per component of the `"h-i"` form.
const MAX_DECIMAL_DIGITS: usize = 10;

/// Registration position of an account.
///
/// Field order matters: the derived `Ord` compares `height` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegId {
    height: BlockHeight,
    index: TxIndex,
}

impl RegId {
    pub const fn new(height: BlockHeight, index: TxIndex) -> Self {
        Self { height, index }
    }

    pub const fn height(&self) -> BlockHeight {
        self.height
    }

    pub const fn index(&self) -> TxIndex {
        self.index
    }

    /// `(0, 0)` never names an account.
    pub const fn is_empty(&self) -> bool {
        self.height == 0 && self.index == 0
    }

    /// Reset to `(0, 0)`, returning whether anything changed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.is_empty();
        *self = Self::default();
        changed
    }

    /// Parse `"<height>-<index>"` or the 12-hex-digit packed form.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if let Some((height, index)) = s.split_once('-') {
            let height = parse_decimal(height, s)?;
            let index = parse_decimal(index, s)?;
            return Ok(Self {
                height: u32::try_from(height)
                    .map_err(|_| ParseError::RegIdOutOfRange { input: s.to_string() })?,
                index: u16::try_from(index)
                    .map_err(|_| ParseError::RegIdOutOfRange { input: s.to_string() })?,
            });
        }
        if s.len() == REG_ID_RAW_SIZE * 2 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            let bytes = hex::decode(s).map_err(|_| ParseError::MalformedRegId {
                input: s.to_string(),
            })?;
            return Self::from_raw(&bytes);
        }
        Err(ParseError::MalformedRegId {
            input: s.to_string(),
        })
    }

    /// Rebuild from raw bytes.
    ///
    /// Exactly 6 bytes are read as the packed form. Any other length is
    /// read as the VARINT pair, which must consume every byte.
    pub fn from_raw(bytes: &[u8]) -> Result<Self, ParseError> {
        if let Ok(packed) = <[u8; REG_ID_RAW_SIZE]>::try_from(bytes) {
            let [h0, h1, h2, h3, i0, i1] = packed;
            return Ok(Self {
                height: u32::from_le_bytes([h0, h1, h2, h3]),
                index: u16::from_le_bytes([i0, i1]),
            });
        }
        Self::decode(bytes).map_err(|_| ParseError::InvalidRawRegId { len: bytes.len() })
    }

    /// Packed raw form, recomputed on each call.
    pub fn raw(&self) -> [u8; REG_ID_RAW_SIZE] {
        let mut out = [0u8; REG_ID_RAW_SIZE];
        out[..4].copy_from_slice(&self.height.to_le_bytes());
        out[4..].copy_from_slice(&self.index.to_le_bytes());
        out
    }

    /// Whether the registration is buried deep enough to be referenced.
    pub fn is_mature(&self, current_height: BlockHeight, config: &MaturityConfig) -> bool {
        u64::from(current_height)
            >= u64::from(self.height) + u64::from(config.reg_id_maturity_blocks)
    }

    /// Key hash of the registered account.
    pub fn key_id<L>(&self, lookup: &L) -> Result<KeyId, ResolveError>
    where
        L: AccountLookup + ?Sized,
    {
        lookup
            .key_id_by_reg_id(self)?
            .ok_or_else(|| ResolveError::AccountNotFound {
                id: self.to_string(),
            })
    }

    /// Fixed-width storage key.
    pub fn storage_key(&self) -> RegIdKey {
        RegIdKey::from(*self)
    }
}

fn parse_decimal(part: &str, input: &str) -> Result<u64, ParseError> {
    if part.is_empty()
        || part.len() > MAX_DECIMAL_DIGITS
        || !part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(ParseError::MalformedRegId {
            input: input.to_string(),
        });
    }
    // Ten digits always fit in a u64.
    part.parse().map_err(|_| ParseError::RegIdOutOfRange {
        input: input.to_string(),
    })
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.height, self.index)
    }
}

impl FromStr for RegId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Encodable for RegId {
    fn encoded_size(&self) -> usize {
        varint_len(u64::from(self.height)) + varint_len(u64::from(self.index))
    }

    fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_varint(u64::from(self.height));
        writer.write_varint(u64::from(self.index));
    }
}

impl Decodable for RegId {
    type Error = CodecError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        let height = reader.read_varint_u32()?;
        let index = reader.read_varint_u16()?;
        Ok(Self { height, index })
    }
}

// =============================================================================
// STORAGE KEY
// =============================================================================

/// Big-endian `(height, index)`; byte order equals [`RegId`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegIdKey([u8; REG_ID_RAW_SIZE]);

impl RegIdKey {
    pub fn as_bytes(&self) -> &[u8; REG_ID_RAW_SIZE] {
        &self.0
    }

    pub fn reg_id(&self) -> RegId {
        let [h0, h1, h2, h3, i0, i1] = self.0;
        RegId::new(
            u32::from_be_bytes([h0, h1, h2, h3]),
            u16::from_be_bytes([i0, i1]),
        )
    }
}

impl From<RegId> for RegIdKey {
    fn from(id: RegId) -> Self {
        let mut out = [0u8; REG_ID_RAW_SIZE];
        out[..4].copy_from_slice(&id.height.to_be_bytes());
        out[4..].copy_from_slice(&id.index.to_be_bytes());
        Self(out)
    }
}

impl From<[u8; REG_ID_RAW_SIZE]> for RegIdKey {
    fn from(bytes: [u8; REG_ID_RAW_SIZE]) -> Self {
        Self(bytes)
    }
}
