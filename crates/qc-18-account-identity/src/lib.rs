//! # Account Identity Subsystem (QC-18)
//!
//! Identifies the accounts a transaction refers to and gives every kind of
//! reference one canonical, compact wire form.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Identifier types and codecs, no I/O
//! - **Ports Layer** (`ports/`): Inbound API and the account lookup it needs
//! - **Adapters** (`adapters/`): In-memory account lookup
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Identifier Kinds
//!
//! | Kind | Payload | Wire size |
//! |------|---------|-----------|
//! | Null | none | 1 |
//! | RegID | `(height, index)` of the registration transaction | 3 to 9 |
//! | KeyID | 20-byte public key hash | 21 |
//! | PubKey | 33-byte compressed public key | 34 |
//! | NickID | nickname packed into a `u64` | 2 to 11 |
//!
//! ## Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | One canonical encoding per identifier | tag-by-length format, canonical compact size and VARINT |
//! | Unknown tags reject the transaction | `DecodeError::UnknownTag` |
//! | Empty values never travel as their own kind | `UserId::from` collapses them to Null |
//! | Decoded bytes re-encode identically | decode never normalizes |
//! | Unresolvable accounts are errors | `ResolveError::AccountNotFound` |
//!
//! ## Example
//!
//! ```
//! use qc_18_account_identity::{RegId, UserId};
//! use shared_types::{Decodable, Encodable};
//!
//! let id: UserId = "100-5".parse().unwrap();
//! assert_eq!(id, UserId::from(RegId::new(100, 5)));
//! assert_eq!(id.encode(), vec![0x02, 0x64, 0x05]);
//! assert_eq!(UserId::decode(&[0x02, 0x64, 0x05]).unwrap(), id);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::InMemoryAccountLookup;
pub use domain::{
    DecodeError, IdentityError, Identifier, MaturityConfig, NickId, NullId, ParseError, RegId,
    RegIdKey, ResolveError, UserId, UserIdJson, UserIdKind,
};
pub use ports::{AccountIdentityApi, AccountLookup, LookupError};
pub use service::AccountIdentityService;
pub use shared_crypto::{KeyId, PubKey};
