//! Hub configuration.
//!
//! Stored as TOML; every field has a default so a partial or empty file is
//! valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::room::DEFAULT_ACTIVE_ROOM_LIMIT;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HubConfig {
    /// Artificial delay applied to session operations, in milliseconds.
    /// Logout waits half of it.
    pub simulated_latency_ms: u64,
    /// Maximum number of active rooms kept.
    pub active_room_limit: usize,
    /// Hide administrative accounts from the logged-out searchable view.
    pub hide_admins_when_anonymous: bool,
    /// Overrides the directory holding durable session storage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: 500,
            active_room_limit: DEFAULT_ACTIVE_ROOM_LIMIT,
            hide_admins_when_anonymous: true,
            storage_dir: None,
        }
    }
}

impl HubConfig {
    /// Default configuration with latency disabled.
    pub fn without_latency() -> Self {
        Self {
            simulated_latency_ms: 0,
            ..Self::default()
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: HubConfig = toml::from_str("").unwrap();
        assert_eq!(config, HubConfig::default());
        assert_eq!(config.active_room_limit, 10);
    }

    #[test]
    fn test_partial_toml() {
        let config: HubConfig = toml::from_str("simulated_latency_ms = 0\nstorage_dir = \"/tmp/hub\"").unwrap();
        assert_eq!(config.latency(), Duration::ZERO);
        assert_eq!(config.storage_dir, Some(PathBuf::from("/tmp/hub")));
        assert!(config.hide_admins_when_anonymous);
    }
}
