//! # Ports Layer
//!
//! - `inbound`: the API this subsystem offers
//! - `outbound`: the account registry it depends on

pub mod inbound;
pub mod outbound;

pub use inbound::AccountIdentityApi;
pub use outbound::{AccountLookup, LookupError};
