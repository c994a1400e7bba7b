//! Infrastructure layer of the Metaverse Hub.
//!
//! Concrete storage backends, the seeded user directory and catalogs, path
//! and configuration handling, and the wiring that assembles a
//! [`hub_core::SessionManager`] from them.

pub mod bootstrap;
pub mod catalog;
pub mod collaborators;
pub mod config_service;
pub mod directory;
pub mod paths;
pub mod storage;

pub use crate::bootstrap::{HubRuntime, bootstrap, bootstrap_with};
pub use crate::catalog::StaticCatalog;
pub use crate::collaborators::{TracingNotifier, TrackingNavigator};
pub use crate::config_service::ConfigService;
pub use crate::directory::InMemoryUserDirectory;
pub use crate::paths::HubPaths;
pub use crate::storage::{FileKeyValueStore, InMemoryKeyValueStore};
