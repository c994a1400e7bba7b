//! Domain layer of the Metaverse Hub.
//!
//! Holds the identity, room and catalog models, the collaborator traits the
//! infrastructure layer implements, and the [`SessionManager`] that ties them
//! together.

pub mod catalog;
pub mod clock;
pub mod config;
pub mod error;
pub mod navigation;
pub mod notification;
pub mod room;
pub mod session;
pub mod storage;
pub mod user;

// Re-export common types
pub use config::HubConfig;
pub use error::HubError;
pub use session::SessionManager;
