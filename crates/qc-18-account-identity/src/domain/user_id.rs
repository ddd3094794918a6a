//! # User Identifier
//!
//! `UserId` is the single type transactions use to reference an account.
//! It holds exactly one of the concrete identifiers and serializes them
//! under one tag-by-length wire format.
//!
//! ## Wire Format
//!
//! A compact-size tag `T`, then the payload:
//!
//! | T | Alternative | Payload |
//! |---|-------------|---------|
//! | 0 | Null | none |
//! | 2..=10 | RegId | `T` bytes of VARINT(height) VARINT(index) |
//! | 20 | KeyId | 20 raw bytes |
//! | 33 | PubKey | 33 key bytes (the key's own length prefix is the tag) |
//! | 100 | NickId | VARINT(value) |
//!
//! Any other tag rejects the enclosing transaction. This layout is
//! consensus-critical: changing it is a hard fork.

use super::{
    DecodeError, Identifier, MaturityConfig, NickId, NullId, ParseError, RegId, ResolveError,
    UserIdKind, NULL_ID_STR,
};
use crate::ports::AccountLookup;
use serde::{Deserialize, Serialize};
use shared_crypto::{KeyId, PubKey, COMPRESSED_PUBLIC_KEY_SIZE, KEY_ID_SIZE};
use shared_types::{
    compact_size_len, varint_len, BlockHeight, Decodable, Encodable, WireReader, WireWriter,
};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

pub const TAG_NULL: u64 = 0;
pub const TAG_REG_ID_MIN: u64 = 2;
pub const TAG_REG_ID_MAX: u64 = 10;
pub const TAG_KEY_ID: u64 = 20;
pub const TAG_PUB_KEY: u64 = 33;
pub const TAG_NICK_ID: u64 = 100;

/// Serialized size of a compressed public key including its length prefix.
const PUB_KEY_WIRE_SIZE: usize = COMPRESSED_PUBLIC_KEY_SIZE + 1;

/// Reference to an account by any supported scheme.
///
/// Construct through `From` so that empty concrete values collapse to
/// [`UserId::Null`]. Decoding bypasses that rule: bytes on the wire are
/// reconstructed exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "UserIdJson", try_from = "UserIdJson")]
pub enum UserId {
    Null(NullId),
    Reg(RegId),
    Key(KeyId),
    PubKey(PubKey),
    Nick(NickId),
}

impl Default for UserId {
    fn default() -> Self {
        Self::Null(NullId)
    }
}

impl UserId {
    /// Wrap a concrete identifier, collapsing empty values to `Null`.
    pub fn from_identifier<T: Identifier>(id: T) -> Self {
        if T::KIND != UserIdKind::Null && id.is_empty() {
            return Self::default();
        }
        id.into_variant()
    }

    /// Replace the held identifier.
    pub fn set<T: Identifier>(&mut self, id: T) {
        *self = Self::from_identifier(id);
    }

    pub fn set_empty(&mut self) {
        *self = Self::default();
    }

    /// Only `Null` is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Null(_))
    }

    pub fn kind(&self) -> UserIdKind {
        match self {
            Self::Null(_) => UserIdKind::Null,
            Self::Reg(_) => UserIdKind::Reg,
            Self::Key(_) => UserIdKind::Key,
            Self::PubKey(_) => UserIdKind::PubKey,
            Self::Nick(_) => UserIdKind::Nick,
        }
    }

    pub fn is_same_type(&self, other: &UserId) -> bool {
        self.kind() == other.kind()
    }

    pub fn as_reg_id(&self) -> Option<&RegId> {
        match self {
            Self::Reg(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_key_id(&self) -> Option<&KeyId> {
        match self {
            Self::Key(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_pub_key(&self) -> Option<&PubKey> {
        match self {
            Self::PubKey(key) => Some(key),
            _ => None,
        }
    }

    pub fn as_nick_id(&self) -> Option<&NickId> {
        match self {
            Self::Nick(id) => Some(id),
            _ => None,
        }
    }

    /// Display name of the active alternative.
    pub fn id_name(&self) -> &'static str {
        self.kind().name()
    }

    /// `{"id_type": ..., "id": ...}`
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id_type": self.id_name(),
            "id": self.to_string(),
        })
    }

    /// `"<id_type>(<id>)"`, for logs.
    pub fn to_debug_string(&self) -> String {
        format!("{}({})", self.id_name(), self)
    }

    /// Parse any supported string form.
    ///
    /// Tried in order: `"Null"`, registration id, `0x` key hash,
    /// compressed public key hex, nickname.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        if s == NULL_ID_STR {
            return Ok(Self::default());
        }
        // '-' never appears in any other form, so report the RegId error.
        if s.contains('-') {
            return RegId::parse(s).map(Self::from);
        }
        if let Ok(reg_id) = RegId::parse(s) {
            return Ok(Self::from(reg_id));
        }
        if s.starts_with("0x") {
            return Ok(Self::from(KeyId::from_str(s)?));
        }
        if s.len() == COMPRESSED_PUBLIC_KEY_SIZE * 2 && s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Ok(Self::from(PubKey::from_str(s)?));
        }
        if let Ok(nick) = NickId::parse(s) {
            return Ok(Self::from(nick));
        }
        Err(ParseError::Unrecognized {
            input: s.to_string(),
        })
    }

    /// Key hash of the referenced account.
    ///
    /// Registration ids and nicknames go through `lookup`; an unknown
    /// account is an error, never a default key.
    pub fn resolve_key_id<L>(&self, lookup: &L) -> Result<KeyId, ResolveError>
    where
        L: AccountLookup + ?Sized,
    {
        match self {
            Self::Null(_) => Err(ResolveError::NullIdentifier),
            Self::Reg(id) => id.key_id(lookup),
            Self::Key(id) => Ok(*id),
            Self::PubKey(key) => key.key_id().map_err(|_| ResolveError::InvalidPublicKey),
            Self::Nick(id) => id.key_id(lookup),
        }
    }

    /// Whether the identifier may be referenced at `current_height`.
    pub fn is_mature(&self, current_height: BlockHeight, config: &MaturityConfig) -> bool {
        match self {
            Self::Null(_) => false,
            Self::Reg(id) => id.is_mature(current_height, config),
            Self::Key(_) | Self::PubKey(_) => true,
            Self::Nick(id) => id.is_mature(current_height, config),
        }
    }

    fn decode_tagged(reader: &mut WireReader<'_>) -> Result<Self, DecodeError> {
        let tag = reader.read_compact_size()?;
        match tag {
            TAG_NULL => Ok(Self::default()),
            TAG_REG_ID_MIN..=TAG_REG_ID_MAX => {
                let declared = tag as usize;
                let start = reader.position();
                let id = RegId::decode_from(reader)?;
                let consumed = reader.position() - start;
                if consumed != declared {
                    return Err(DecodeError::RegIdLengthMismatch { declared, consumed });
                }
                Ok(Self::Reg(id))
            }
            TAG_KEY_ID => Ok(Self::Key(KeyId::decode_from(reader)?)),
            TAG_PUB_KEY => Ok(Self::PubKey(PubKey::decode_payload(
                reader,
                COMPRESSED_PUBLIC_KEY_SIZE,
            )?)),
            TAG_NICK_ID => Ok(Self::Nick(NickId::decode_from(reader)?)),
            tag => Err(DecodeError::UnknownTag { tag }),
        }
    }
}

macro_rules! impl_from_identifier {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for UserId {
                fn from(id: $ty) -> Self {
                    Self::from_identifier(id)
                }
            }
        )*
    };
}

impl_from_identifier!(NullId, RegId, KeyId, PubKey, NickId);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null(id) => fmt::Display::fmt(id, f),
            Self::Reg(id) => fmt::Display::fmt(id, f),
            Self::Key(id) => fmt::Display::fmt(id, f),
            Self::PubKey(key) => fmt::Display::fmt(key, f),
            Self::Nick(id) => fmt::Display::fmt(id, f),
        }
    }
}

impl FromStr for UserId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Encodable for UserId {
    fn encoded_size(&self) -> usize {
        match self {
            Self::Null(_) => compact_size_len(TAG_NULL),
            Self::Reg(id) => {
                let payload = id.encoded_size();
                compact_size_len(payload as u64) + payload
            }
            Self::Key(_) => compact_size_len(TAG_KEY_ID) + KEY_ID_SIZE,
            Self::PubKey(key) => key.encoded_size(),
            Self::Nick(id) => compact_size_len(TAG_NICK_ID) + varint_len(id.value()),
        }
    }

    /// # Panics
    ///
    /// If the held value cannot produce its fixed-size payload. That can
    /// only happen when a `UserId` was assembled around a malformed value.
    fn encode_to(&self, writer: &mut WireWriter) {
        match self {
            Self::Null(_) => writer.write_compact_size(TAG_NULL),
            Self::Reg(id) => {
                let payload = id.encoded_size() as u64;
                assert!(
                    (TAG_REG_ID_MIN..=TAG_REG_ID_MAX).contains(&payload),
                    "RegId payload of {payload} bytes"
                );
                writer.write_compact_size(payload);
                id.encode_to(writer);
            }
            Self::Key(id) => {
                assert_eq!(id.encoded_size() as u64, TAG_KEY_ID, "KeyId payload size");
                writer.write_compact_size(TAG_KEY_ID);
                id.encode_to(writer);
            }
            Self::PubKey(key) => {
                assert_eq!(key.encoded_size(), PUB_KEY_WIRE_SIZE, "PubKey wire size");
                key.encode_to(writer);
            }
            Self::Nick(id) => {
                writer.write_compact_size(TAG_NICK_ID);
                id.encode_to(writer);
            }
        }
    }
}

impl Decodable for UserId {
    type Error = DecodeError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        let offset = reader.position();
        Self::decode_tagged(reader).inspect_err(|e| {
            warn!(offset, error = %e, "Rejected account identifier");
        })
    }
}

// =============================================================================
// JSON FORM
// =============================================================================

/// Object form used by RPC and `serde`.
///
/// Public keys are carried compressed. An empty `NickID` stands for the
/// wire value `NickId(0)` and reads back as that value, not as Null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdJson {
    pub id_type: String,
    pub id: String,
}

impl From<UserId> for UserIdJson {
    fn from(id: UserId) -> Self {
        Self {
            id_type: id.id_name().to_string(),
            id: id.to_string(),
        }
    }
}

impl TryFrom<UserIdJson> for UserId {
    type Error = ParseError;

    fn try_from(json: UserIdJson) -> Result<Self, Self::Error> {
        let kind = UserIdKind::from_name(&json.id_type).ok_or_else(|| {
            ParseError::UnknownIdType {
                name: json.id_type.clone(),
            }
        })?;
        Ok(match kind {
            UserIdKind::Null => Self::default(),
            UserIdKind::Reg => Self::from(RegId::parse(&json.id)?),
            UserIdKind::Key => Self::from(KeyId::from_str(&json.id)?),
            UserIdKind::PubKey => Self::from(PubKey::from_str(&json.id)?),
            // Only a decoded wire NickId(0) displays as "".
            UserIdKind::Nick if json.id.is_empty() => Self::Nick(NickId::default()),
            UserIdKind::Nick => Self::from(NickId::parse(&json.id)?),
        })
    }
}
