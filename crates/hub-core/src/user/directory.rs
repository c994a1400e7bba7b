//! User directory trait.
//!
//! Defines the interface to the catalog of every known identity.

use async_trait::async_trait;

use super::model::User;
use crate::error::Result;

/// The system of record for "who exists".
///
/// The directory is constructed once at process start and handed to the
/// session manager by reference; it is the join target when resolving a
/// user's `friend_ids` into full identities.
///
/// # Implementation Notes
///
/// Ids are unique. `update` replaces an existing entry in place and must not
/// insert unknown ids.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Lists every known identity in directory order.
    async fn list_all(&self) -> Result<Vec<User>>;

    /// Finds an identity by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))`: Identity found
    /// - `Ok(None)`: No identity with that id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Finds an identity by exact email match.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Returns the identities whose id is in `ids`, in directory order.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>>;

    /// Replaces the entry with the same id.
    ///
    /// # Returns
    ///
    /// - `Ok(true)`: Entry replaced
    /// - `Ok(false)`: No entry with that id; nothing changed
    async fn update(&self, user: &User) -> Result<bool>;
}
