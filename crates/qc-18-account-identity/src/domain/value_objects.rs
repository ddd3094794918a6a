//! # Value Objects
//!
//! Configuration consumed by the identifier maturity rules.

use serde::{Deserialize, Serialize};
use shared_types::BlockHeight;
use std::env;

/// Blocks a registration id must age before it is mature.
pub const DEFAULT_REG_ID_MATURITY_BLOCKS: u32 = 100;

/// Height from which nickname identifiers are usable.
pub const DEFAULT_NICK_ID_ACTIVATION_HEIGHT: BlockHeight = 0;

/// Maturity thresholds per identifier kind.
///
/// The thresholds belong to the chain parameters; this subsystem only reads
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityConfig {
    /// A registration id at height `H` is mature from height
    /// `H + reg_id_maturity_blocks` on (default: 100).
    pub reg_id_maturity_blocks: u32,
    /// Nicknames are mature from this height on (default: 0).
    pub nick_id_activation_height: BlockHeight,
}

impl Default for MaturityConfig {
    fn default() -> Self {
        Self {
            reg_id_maturity_blocks: DEFAULT_REG_ID_MATURITY_BLOCKS,
            nick_id_activation_height: DEFAULT_NICK_ID_ACTIVATION_HEIGHT,
        }
    }
}

impl MaturityConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `QC_REG_ID_MATURITY_BLOCKS`: registration id maturity (default: 100)
    /// - `QC_NICK_ID_ACTIVATION_HEIGHT`: nickname activation height (default: 0)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            reg_id_maturity_blocks: env::var("QC_REG_ID_MATURITY_BLOCKS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REG_ID_MATURITY_BLOCKS),

            nick_id_activation_height: env::var("QC_NICK_ID_ACTIVATION_HEIGHT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_NICK_ID_ACTIVATION_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maturity_config_default() {
        let config = MaturityConfig::default();
        assert_eq!(config.reg_id_maturity_blocks, 100);
        assert_eq!(config.nick_id_activation_height, 0);
    }

    #[test]
    fn test_maturity_config_serde() {
        let config = MaturityConfig {
            reg_id_maturity_blocks: 7,
            nick_id_activation_height: 42,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: MaturityConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
