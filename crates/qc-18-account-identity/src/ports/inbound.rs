//! # Inbound Ports (Driving Ports / API)
//!
//! The public API of the Account Identity subsystem.

use crate::domain::{IdentityError, MaturityConfig, UserId};
use shared_crypto::KeyId;
use shared_types::BlockHeight;

/// Primary Account Identity API.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait AccountIdentityApi: Send + Sync {
    /// Parse any supported string form.
    fn parse_user_id(&self, input: &str) -> Result<UserId, IdentityError>;

    /// Canonical wire bytes.
    ///
    /// # Panics
    /// If `id` holds a malformed payload (see `UserId::encode_to`).
    fn encode_user_id(&self, id: &UserId) -> Vec<u8>;

    /// Decode wire bytes that must hold exactly one identifier.
    fn decode_user_id(&self, bytes: &[u8]) -> Result<UserId, IdentityError>;

    /// Key hash of the referenced account.
    fn resolve_key_id(&self, id: &UserId) -> Result<KeyId, IdentityError>;

    /// Whether `id` may be referenced at `current_height`.
    fn is_mature(&self, id: &UserId, current_height: BlockHeight) -> bool;

    /// Thresholds used by [`AccountIdentityApi::is_mature`].
    fn maturity_config(&self) -> &MaturityConfig;
}
