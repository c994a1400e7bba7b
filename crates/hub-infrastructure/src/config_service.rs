//! Configuration service implementation.
//!
//! Loads `HubConfig` from `config.toml`, writing the defaults on first use.

use std::path::PathBuf;

use hub_core::config::HubConfig;
use hub_core::error::Result;

use crate::paths::HubPaths;
use crate::storage::AtomicFile;

/// Loads and saves the hub configuration file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    paths: HubPaths,
}

impl ConfigService {
    pub fn new(paths: HubPaths) -> Self {
        Self { paths }
    }

    /// Reads the configuration.
    ///
    /// A missing file is created with default values. A malformed file is an
    /// error rather than silently replaced.
    pub fn load(&self) -> Result<HubConfig> {
        let file = AtomicFile::new(self.paths.config_file()?);
        match file.read()? {
            Some(content) => {
                let config: HubConfig = toml::from_str(&content)?;
                tracing::debug!("[ConfigService] Loaded config from {:?}", file.path());
                Ok(config)
            }
            None => {
                let config = HubConfig::default();
                file.write(&toml::to_string_pretty(&config)?)?;
                tracing::info!("[ConfigService] Wrote default config to {:?}", file.path());
                Ok(config)
            }
        }
    }

    pub fn save(&self, config: &HubConfig) -> Result<()> {
        let file = AtomicFile::new(self.paths.config_file()?);
        file.write(&toml::to_string_pretty(config)?)
    }

    /// Storage directory to use: the configured override, or the default
    /// location under the config directory.
    pub fn storage_dir(&self, config: &HubConfig) -> Result<PathBuf> {
        match &config.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => self.paths.storage_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(HubPaths::new(Some(temp_dir.path())));

        let config = service.load().unwrap();
        assert_eq!(config, HubConfig::default());
        assert!(temp_dir.path().join("config.toml").exists());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(HubPaths::new(Some(temp_dir.path())));

        let config = HubConfig {
            simulated_latency_ms: 0,
            active_room_limit: 5,
            ..HubConfig::default()
        };
        service.save(&config).unwrap();
        assert_eq!(service.load().unwrap(), config);
        assert_eq!(
            service.storage_dir(&config).unwrap(),
            temp_dir.path().join("storage")
        );
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("config.toml"), "active_room_limit = \"ten\"").unwrap();
        let service = ConfigService::new(HubPaths::new(Some(temp_dir.path())));

        assert!(service.load().unwrap_err().is_serialization());
    }
}
