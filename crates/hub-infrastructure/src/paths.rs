//! Path management for hub configuration and storage.
//!
//! ```text
//! ~/.config/metaverse-hub/     # Config directory
//! ├── config.toml              # HubConfig
//! └── storage/                 # FileKeyValueStore (one JSON file per key)
//! ```

use std::path::{Path, PathBuf};

use hub_core::error::{HubError, Result};

const APP_DIR_NAME: &str = "metaverse-hub";

/// Resolves hub paths, either under the platform config directory or under
/// an explicit base directory.
#[derive(Debug, Clone)]
pub struct HubPaths {
    base_dir: Option<PathBuf>,
}

impl HubPaths {
    /// `base_dir` overrides the platform config directory when given.
    pub fn new(base_dir: Option<&Path>) -> Self {
        Self {
            base_dir: base_dir.map(Path::to_path_buf),
        }
    }

    /// Returns the hub configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/metaverse-hub/`
    /// - `Err(HubError::Config)`: The platform config directory is unknown
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME))
            .ok_or_else(|| HubError::config("Cannot find config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Directory of the durable session storage.
    pub fn storage_dir(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("storage"))
    }
}
