//! # Shared Crypto - Account Key Primitives
//!
//! ## Components
//!
//! | Module | Type | Use Case |
//! |--------|------|----------|
//! | `ecdsa` | secp256k1 `PubKey` | Raw public-key account references |
//! | `key_id` | `KeyId` | 20-byte key hash account references |
//! | `hashing` | Keccak-256 | Key hash derivation |
//!
//! ## Security Properties
//!
//! - **Point validation**: keys parsed from text are checked against the
//!   curve; keys read off the wire are kept byte-exact and can be checked
//!   with `PubKey::is_fully_valid`.
//! - **Compression-independent hashing**: a key hashes to the same `KeyId`
//!   whether it is held compressed or uncompressed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod hashing;
pub mod key_id;

// Re-exports
pub use ecdsa::{PubKey, Secp256k1KeyPair, COMPRESSED_PUBLIC_KEY_SIZE, PUBLIC_KEY_SIZE};
pub use errors::CryptoError;
pub use hashing::keccak256;
pub use key_id::{KeyId, KEY_ID_SIZE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
