//! # Core Primitives
//!
//! Primitive aliases shared by every crate in the workspace.

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// A 20-byte account address (key hash).
pub type Address = [u8; 20];

/// Ledger block height.
///
/// Heights are 32-bit on the wire; registration identifiers pack them into
/// their compact form.
pub type BlockHeight = u32;

/// Position of a transaction inside its block.
pub type TxIndex = u16;
