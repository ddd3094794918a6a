use std::fmt;

/// String form of the null identifier.
pub const NULL_ID_STR: &str = "Null";

/// The absent account reference.
///
/// All instances are equal and compare as `Equal`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NullId;

impl NullId {
    pub const fn is_empty(&self) -> bool {
        true
    }
}

impl fmt::Display for NullId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NULL_ID_STR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_id() {
        assert!(NullId.is_empty());
        assert_eq!(NullId, NullId::default());
        assert!(NullId <= NullId);
        assert_eq!(NullId.to_string(), "Null");
    }
}
