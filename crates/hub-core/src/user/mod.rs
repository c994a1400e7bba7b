//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: User identity domain model (`User`, `Role`)
//! - `directory`: Directory trait, the system of record for known users
//! - `social`: Derivation of the friends and searchable-users views
//!
//! # Usage
//!
//! ```ignore
//! use hub_core::user::{User, Role, UserDirectory};
//! ```

mod directory;
mod model;
mod social;

// Re-export public API
pub use directory::UserDirectory;
pub use model::{AVATAR_PLACEHOLDER_BASE, Role, User, placeholder_avatar_url};
pub use social::{SocialView, derive_friends, derive_searchable, matches_search};
