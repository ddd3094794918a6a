//! # Nickname Identifier
//!
//! A human-chosen account name packed into a `u64`.
//!
//! ## Name Encoding (version 1)
//!
//! Each character maps to a symbol in `.12345abcdefghijklmnopqrstuvwxyz`
//! (`.` = 0, `z` = 31). The first 12 characters take 5 bits each, filled
//! from the most significant end. A 13th character fills the remaining low
//! 4 bits, so it is limited to symbols `0..=15` (`.` through `j`).
//!
//! Display trims trailing `.`; names that end in `.` are rejected on parse
//! so that every accepted name round-trips.

use super::{MaturityConfig, ParseError, ResolveError};
use crate::ports::AccountLookup;
use shared_crypto::KeyId;
use shared_types::{varint_len, BlockHeight, CodecError, Decodable, Encodable, WireReader, WireWriter};
use std::fmt;
use std::str::FromStr;

/// Bumped whenever the name-to-integer mapping changes.
pub const NICKNAME_FORMAT_VERSION: u8 = 1;

/// Symbol alphabet, indexed by symbol value.
pub const NICKNAME_CHARSET: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

/// Longest accepted name.
pub const MAX_NICKNAME_LEN: usize = 13;

/// Characters that carry a full 5-bit symbol.
const FULL_SYMBOLS: usize = 12;

/// Nickname packed into an integer. `0` is the empty nickname.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NickId(u64);

impl NickId {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Encode a name.
    pub fn parse(name: &str) -> Result<Self, ParseError> {
        if name.is_empty() {
            return Err(ParseError::Empty);
        }
        let len = name.chars().count();
        if len > MAX_NICKNAME_LEN {
            return Err(ParseError::NicknameTooLong {
                len,
                max: MAX_NICKNAME_LEN,
            });
        }
        if name.ends_with('.') {
            return Err(ParseError::NicknameTrailingDot);
        }

        let mut value = 0u64;
        for (position, ch) in name.chars().enumerate() {
            let symbol = symbol_of(ch).ok_or(ParseError::InvalidNicknameChar { ch, position })?;
            if position < FULL_SYMBOLS {
                value |= u64::from(symbol) << (64 - 5 * (position + 1));
            } else {
                if symbol > 0x0F {
                    return Err(ParseError::InvalidNicknameChar { ch, position });
                }
                value |= u64::from(symbol);
            }
        }
        Ok(Self(value))
    }

    /// Nicknames become usable at the configured activation height.
    pub fn is_mature(&self, current_height: BlockHeight, config: &MaturityConfig) -> bool {
        current_height >= config.nick_id_activation_height
    }

    /// Key hash of the account holding this nickname.
    pub fn key_id<L>(&self, lookup: &L) -> Result<KeyId, ResolveError>
    where
        L: AccountLookup + ?Sized,
    {
        lookup
            .key_id_by_nick_id(self)?
            .ok_or_else(|| ResolveError::AccountNotFound {
                id: self.to_string(),
            })
    }
}

fn symbol_of(ch: char) -> Option<u8> {
    match ch {
        '.' => Some(0),
        '1'..='5' => Some(ch as u8 - b'1' + 1),
        'a'..='z' => Some(ch as u8 - b'a' + 6),
        _ => None,
    }
}

impl fmt::Display for NickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [b'.'; MAX_NICKNAME_LEN];
        let mut rest = self.0;
        out[FULL_SYMBOLS] = NICKNAME_CHARSET[(rest & 0x0F) as usize];
        rest >>= 4;
        for slot in out[..FULL_SYMBOLS].iter_mut().rev() {
            *slot = NICKNAME_CHARSET[(rest & 0x1F) as usize];
            rest >>= 5;
        }
        let end = out.iter().rposition(|&b| b != b'.').map_or(0, |i| i + 1);
        let name: String = out[..end].iter().map(|&b| char::from(b)).collect();
        f.write_str(&name)
    }
}

impl FromStr for NickId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Encodable for NickId {
    fn encoded_size(&self) -> usize {
        varint_len(self.0)
    }

    fn encode_to(&self, writer: &mut WireWriter) {
        writer.write_varint(self.0);
    }
}

impl Decodable for NickId {
    type Error = CodecError;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error> {
        Ok(Self(reader.read_varint()?))
    }
}
