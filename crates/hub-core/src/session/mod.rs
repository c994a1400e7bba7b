//! Session & social state management.
//!
//! # Module Structure
//!
//! - `manager`: The state manager (`SessionManager`) and its outcomes
//! - `avatar`: Session-scoped avatar uploads (`AvatarFile`, `AvatarRegistry`)
//!
//! # Usage
//!
//! ```ignore
//! use hub_core::session::{SessionManager, AddFriendOutcome};
//! ```

mod avatar;
mod manager;


pub use avatar::{AVATAR_URL_PREFIX, AvatarFile, AvatarRegistry};
pub use manager::{AddFriendOutcome, SessionManager};
