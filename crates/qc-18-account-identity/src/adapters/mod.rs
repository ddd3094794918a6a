//! # Adapters
//!
//! Implementations of the outbound ports.

pub mod memory_accounts;

pub use memory_accounts::InMemoryAccountLookup;
