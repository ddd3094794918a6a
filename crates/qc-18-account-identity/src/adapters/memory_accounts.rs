//! # In-Memory Account Lookup
//!
//! `AccountLookup` backed by two maps, for tests and tooling.

use crate::domain::{NickId, RegId, RegIdKey};
use crate::ports::{AccountLookup, LookupError};
use parking_lot::RwLock;
use shared_crypto::KeyId;
use std::collections::HashMap;

/// In-memory account registry for testing and tooling.
#[derive(Debug, Default)]
pub struct InMemoryAccountLookup {
    by_reg_id: RwLock<HashMap<RegIdKey, KeyId>>,
    by_nick_id: RwLock<HashMap<NickId, KeyId>>,
}

impl InMemoryAccountLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account, optionally under a nickname.
    ///
    /// Re-registering a key replaces the previous mapping.
    pub fn register(&self, reg_id: RegId, nick_id: Option<NickId>, key_id: KeyId) {
        self.by_reg_id.write().insert(reg_id.storage_key(), key_id);
        if let Some(nick) = nick_id.filter(|n| !n.is_empty()) {
            self.by_nick_id.write().insert(nick, key_id);
        }
    }

    /// Drop a nickname mapping, returning whether one existed.
    pub fn release_nickname(&self, nick_id: &NickId) -> bool {
        self.by_nick_id.write().remove(nick_id).is_some()
    }

    pub fn account_count(&self) -> usize {
        self.by_reg_id.read().len()
    }
}

impl AccountLookup for InMemoryAccountLookup {
    fn key_id_by_reg_id(&self, reg_id: &RegId) -> Result<Option<KeyId>, LookupError> {
        Ok(self.by_reg_id.read().get(&reg_id.storage_key()).copied())
    }

    fn key_id_by_nick_id(&self, nick_id: &NickId) -> Result<Option<KeyId>, LookupError> {
        Ok(self.by_nick_id.read().get(nick_id).copied())
    }
}
