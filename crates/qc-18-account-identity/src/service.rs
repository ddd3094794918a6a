//! # Account Identity Service
//!
//! Application service that implements [`AccountIdentityApi`].
//!
//! - Implements the inbound port (`AccountIdentityApi`)
//! - Uses the outbound port (`AccountLookup`) to resolve registration ids
//!   and nicknames
//! - Delegates parsing and encoding to the domain layer

use crate::domain::{IdentityError, MaturityConfig, UserId};
use crate::ports::inbound::AccountIdentityApi;
use crate::ports::outbound::AccountLookup;
use shared_crypto::KeyId;
use shared_types::{BlockHeight, Decodable, Encodable};
use tracing::{debug, warn};

/// Account Identity Service.
pub struct AccountIdentityService<L: AccountLookup> {
    lookup: L,
    maturity: MaturityConfig,
}

impl<L: AccountLookup> AccountIdentityService<L> {
    /// Create a service with the given thresholds.
    pub fn new(lookup: L, maturity: MaturityConfig) -> Self {
        Self { lookup, maturity }
    }

    /// Create a service with thresholds read from the environment.
    pub fn from_env(lookup: L) -> Self {
        Self::new(lookup, MaturityConfig::from_env())
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }
}

impl<L: AccountLookup> AccountIdentityApi for AccountIdentityService<L> {
    fn parse_user_id(&self, input: &str) -> Result<UserId, IdentityError> {
        let id = UserId::parse(input)?;
        debug!(id = %id.to_debug_string(), "Parsed account identifier");
        Ok(id)
    }

    fn encode_user_id(&self, id: &UserId) -> Vec<u8> {
        id.encode()
    }

    fn decode_user_id(&self, bytes: &[u8]) -> Result<UserId, IdentityError> {
        let id = UserId::decode(bytes)?;
        debug!(id = %id.to_debug_string(), len = bytes.len(), "Decoded account identifier");
        Ok(id)
    }

    fn resolve_key_id(&self, id: &UserId) -> Result<KeyId, IdentityError> {
        match id.resolve_key_id(&self.lookup) {
            Ok(key_id) => {
                debug!(id = %id.to_debug_string(), key_id = %key_id, "Resolved account");
                Ok(key_id)
            }
            Err(e) => {
                warn!(id = %id.to_debug_string(), error = %e, "Account resolution failed");
                Err(e.into())
            }
        }
    }

    fn is_mature(&self, id: &UserId, current_height: BlockHeight) -> bool {
        id.is_mature(current_height, &self.maturity)
    }

    fn maturity_config(&self) -> &MaturityConfig {
        &self.maturity
    }
}
