//! # Outbound Ports (Driven Ports / SPI)
//!
//! Dependencies this subsystem needs from the account registry.

use crate::domain::{NickId, RegId};
use shared_crypto::KeyId;
use thiserror::Error;

/// Error from the account registry backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The backing store could not answer.
    #[error("Account store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with data it could not interpret.
    #[error("Corrupt account record: {0}")]
    Corrupt(String),
}

/// Read access to registered accounts.
///
/// `Ok(None)` means the store answered and the account does not exist.
pub trait AccountLookup: Send + Sync {
    /// Key hash of the account registered at `reg_id`.
    fn key_id_by_reg_id(&self, reg_id: &RegId) -> Result<Option<KeyId>, LookupError>;

    /// Key hash of the account holding `nick_id`.
    fn key_id_by_nick_id(&self, nick_id: &NickId) -> Result<Option<KeyId>, LookupError>;
}
