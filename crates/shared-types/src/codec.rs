//! # Wire Codec
//!
//! Canonical byte encoding shared by every consensus-visible structure.
//!
//! ## Primitives
//!
//! | Primitive | Layout | Used for |
//! |-----------|--------|----------|
//! | compact size | `< 0xFD`: 1 byte, `0xFD` + u16 LE, `0xFE` + u32 LE, `0xFF` + u64 LE | lengths and tags |
//! | VARINT | MSB-first base-128, `+1` offset per continuation byte | heights, indices, amounts |
//!
//! Both encodings are bijective: every value has exactly one encoding and
//! the decoders reject every other byte sequence. Two nodes encoding the
//! same value therefore always produce identical bytes.

use crate::errors::CodecError;

/// Largest value accepted by [`WireReader::read_compact_size`].
pub const MAX_COMPACT_SIZE: u64 = 0x0200_0000;

/// Longest VARINT encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

// =============================================================================
// SIZE HELPERS
// =============================================================================

/// Number of bytes [`WireWriter::write_compact_size`] emits for `value`.
pub fn compact_size_len(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

/// Number of bytes [`WireWriter::write_varint`] emits for `value`.
pub fn varint_len(mut value: u64) -> usize {
    let mut len = 1;
    while value > 0x7F {
        value = (value >> 7) - 1;
        len += 1;
    }
    len
}

// =============================================================================
// WRITER
// =============================================================================

/// Append-only byte sink.
#[derive(Debug, Default, Clone)]
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a pre-sized buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Bytes written so far.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the writer and return its buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Write a compact-size integer.
    pub fn write_compact_size(&mut self, value: u64) {
        if value < 0xFD {
            self.buf.push(value as u8);
        } else if value <= 0xFFFF {
            self.buf.push(0xFD);
            self.buf.extend_from_slice(&(value as u16).to_le_bytes());
        } else if value <= 0xFFFF_FFFF {
            self.buf.push(0xFE);
            self.buf.extend_from_slice(&(value as u32).to_le_bytes());
        } else {
            self.buf.push(0xFF);
            self.buf.extend_from_slice(&value.to_le_bytes());
        }
    }

    /// Write a VARINT.
    ///
    /// Groups of 7 bits are emitted most significant first. Every byte but
    /// the last carries the continuation bit, and each continuation step
    /// subtracts one so that no value has two encodings.
    pub fn write_varint(&mut self, mut value: u64) {
        let mut tmp = [0u8; MAX_VARINT_LEN];
        let mut len = 0;
        loop {
            tmp[len] = (value & 0x7F) as u8 | if len > 0 { 0x80 } else { 0x00 };
            if value <= 0x7F {
                break;
            }
            value = (value >> 7) - 1;
            len += 1;
        }
        for i in (0..=len).rev() {
            self.buf.push(tmp[i]);
        }
    }
}

// =============================================================================
// READER
// =============================================================================

/// Cursor over a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current offset from the start of the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not consumed yet.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail with [`CodecError::TrailingBytes`] unless all input was consumed.
    pub fn finish(&self) -> Result<(), CodecError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(CodecError::TrailingBytes(n)),
        }
    }

    pub fn read_u8(&mut self) -> Result<u8, CodecError> {
        let byte = *self.data.get(self.pos).ok_or(CodecError::UnexpectedEof {
            needed: 1,
            remaining: 0,
        })?;
        self.pos += 1;
        Ok(byte)
    }

    /// Borrow the next `len` bytes.
    pub fn read_slice(&mut self, len: usize) -> Result<&'a [u8], CodecError> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(CodecError::UnexpectedEof {
                needed: len,
                remaining,
            });
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], CodecError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    /// Read a compact-size integer, rejecting non-canonical forms.
    pub fn read_compact_size(&mut self) -> Result<u64, CodecError> {
        let marker = self.read_u8()?;
        let value = match marker {
            0xFD => {
                let v = u64::from(u16::from_le_bytes(self.read_array()?));
                if v < 0xFD {
                    return Err(CodecError::NonCanonicalCompactSize(v));
                }
                v
            }
            0xFE => {
                let v = u64::from(u32::from_le_bytes(self.read_array()?));
                if v <= 0xFFFF {
                    return Err(CodecError::NonCanonicalCompactSize(v));
                }
                v
            }
            0xFF => {
                let v = u64::from_le_bytes(self.read_array()?);
                if v <= 0xFFFF_FFFF {
                    return Err(CodecError::NonCanonicalCompactSize(v));
                }
                v
            }
            small => u64::from(small),
        };
        if value > MAX_COMPACT_SIZE {
            return Err(CodecError::CompactSizeTooLarge(value));
        }
        Ok(value)
    }

    /// Read a VARINT into a `u64`.
    pub fn read_varint(&mut self) -> Result<u64, CodecError> {
        let mut value: u64 = 0;
        loop {
            let byte = self.read_u8()?;
            if value > (u64::MAX >> 7) {
                return Err(CodecError::VarIntOverflow);
            }
            value = (value << 7) | u64::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
            if value == u64::MAX {
                return Err(CodecError::VarIntOverflow);
            }
            value += 1;
        }
    }

    /// Read a VARINT that must fit in a `u32`.
    pub fn read_varint_u32(&mut self) -> Result<u32, CodecError> {
        let value = self.read_varint()?;
        u32::try_from(value).map_err(|_| CodecError::ValueOutOfRange {
            target: "u32",
            value,
        })
    }

    /// Read a VARINT that must fit in a `u16`.
    pub fn read_varint_u16(&mut self) -> Result<u16, CodecError> {
        let value = self.read_varint()?;
        u16::try_from(value).map_err(|_| CodecError::ValueOutOfRange {
            target: "u16",
            value,
        })
    }
}

// =============================================================================
// TRAITS
// =============================================================================

/// A type with a canonical wire form.
pub trait Encodable {
    /// Exact number of bytes [`Encodable::encode_to`] writes.
    fn encoded_size(&self) -> usize;

    fn encode_to(&self, writer: &mut WireWriter);

    /// Encode into a fresh buffer.
    fn encode(&self) -> Vec<u8> {
        let mut writer = WireWriter::with_capacity(self.encoded_size());
        self.encode_to(&mut writer);
        writer.into_bytes()
    }
}

/// A type that can be rebuilt from its wire form.
pub trait Decodable: Sized {
    type Error: From<CodecError>;

    fn decode_from(reader: &mut WireReader<'_>) -> Result<Self, Self::Error>;

    /// Decode a value that must span the whole input.
    fn decode(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut reader = WireReader::new(bytes);
        let value = Self::decode_from(&mut reader)?;
        reader.finish()?;
        Ok(value)
    }
}
