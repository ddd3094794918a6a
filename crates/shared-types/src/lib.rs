//! # Shared Types Crate
//!
//! Primitive aliases and the canonical wire codec shared across the
//! workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: every consensus-visible encoding goes
//!   through [`codec`]; no crate hand-rolls its own integer layout.
//! - **Deterministic Bytes**: encoders are pure functions of their input.
//! - **Strict Decoding**: decoders reject non-canonical input instead of
//!   normalizing it.

pub mod codec;
pub mod entities;
pub mod errors;

pub use codec::{
    compact_size_len, varint_len, Decodable, Encodable, WireReader, WireWriter,
    MAX_COMPACT_SIZE, MAX_VARINT_LEN,
};
pub use entities::*;
pub use errors::*;
