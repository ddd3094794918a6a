//! # Identifier Capability
//!
//! The closed set of concrete identifier kinds and the capability each of
//! them exposes to the [`UserId`] facade.

use super::{NickId, NullId, RegId, UserId};
use shared_crypto::{KeyId, PubKey};
use std::fmt;

/// Which alternative a [`UserId`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UserIdKind {
    Null,
    Reg,
    Key,
    PubKey,
    Nick,
}

/// Display names, fixed for the lifetime of the process.
const ID_NAMES: [(UserIdKind, &str); 5] = [
    (UserIdKind::Null, "Null"),
    (UserIdKind::Reg, "RegID"),
    (UserIdKind::Key, "KeyID"),
    (UserIdKind::PubKey, "PubKey"),
    (UserIdKind::Nick, "NickID"),
];

impl UserIdKind {
    /// Display name, or `""` for a kind missing from the table.
    pub fn name(self) -> &'static str {
        ID_NAMES
            .iter()
            .find(|(kind, _)| *kind == self)
            .map(|(_, name)| *name)
            .unwrap_or("")
    }

    /// Reverse lookup of [`UserIdKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        ID_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(kind, _)| *kind)
    }
}

impl fmt::Display for UserIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete identifier that can back a [`UserId`].
pub trait Identifier: fmt::Display + Sized {
    const KIND: UserIdKind;

    fn is_empty(&self) -> bool;

    /// Activate the matching alternative.
    ///
    /// Skips empty normalization; prefer `UserId::from`. Public keys are
    /// stored compressed when the point is valid, since the wire form only
    /// carries 33-byte keys.
    fn into_variant(self) -> UserId;
}

impl Identifier for NullId {
    const KIND: UserIdKind = UserIdKind::Null;

    fn is_empty(&self) -> bool {
        true
    }

    fn into_variant(self) -> UserId {
        UserId::Null(self)
    }
}

impl Identifier for RegId {
    const KIND: UserIdKind = UserIdKind::Reg;

    fn is_empty(&self) -> bool {
        RegId::is_empty(self)
    }

    fn into_variant(self) -> UserId {
        UserId::Reg(self)
    }
}

impl Identifier for KeyId {
    const KIND: UserIdKind = UserIdKind::Key;

    fn is_empty(&self) -> bool {
        KeyId::is_empty(self)
    }

    fn into_variant(self) -> UserId {
        UserId::Key(self)
    }
}

impl Identifier for PubKey {
    const KIND: UserIdKind = UserIdKind::PubKey;

    fn is_empty(&self) -> bool {
        PubKey::is_empty(self)
    }

    fn into_variant(self) -> UserId {
        if self.is_compressed() {
            return UserId::PubKey(self);
        }
        UserId::PubKey(self.compressed().unwrap_or(self))
    }
}

impl Identifier for NickId {
    const KIND: UserIdKind = UserIdKind::Nick;

    fn is_empty(&self) -> bool {
        NickId::is_empty(self)
    }

    fn into_variant(self) -> UserId {
        UserId::Nick(self)
    }
}
