//! Durable client-side storage.
//!
//! `KeyValueStore` is the raw key-value contract (whole-value overwrite per
//! key). `SessionStore` layers the two typed session records on top of it.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::room::{ActiveRoom, ActiveRoomList};
use crate::user::User;

/// Key holding the serialized current user; absent while logged out.
pub const USER_STORAGE_KEY: &str = "metaverse-user";

/// Key holding the serialized active room list.
pub const ACTIVE_ROOMS_STORAGE_KEY: &str = "metaverse-active-rooms";

/// Durable string key-value storage.
///
/// Every write replaces the entire value for its key; implementations must
/// make a single `set` atomic per key.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Typed access to the session records kept in a [`KeyValueStore`].
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads the persisted current user.
    ///
    /// A payload that fails to parse is removed from storage and reported as
    /// absent. A missing `friendIds` field loads as an empty list.
    pub async fn load_user(&self) -> Result<Option<User>> {
        let Some(raw) = self.store.get(USER_STORAGE_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user.normalized())),
            Err(e) => {
                warn!(
                    "[SessionStore] Failed to parse user from storage, discarding: {}",
                    e
                );
                self.store.remove(USER_STORAGE_KEY).await?;
                Ok(None)
            }
        }
    }

    pub async fn save_user(&self, user: &User) -> Result<()> {
        let json = serde_json::to_string(user)?;
        self.store.set(USER_STORAGE_KEY, &json).await
    }

    pub async fn clear_user(&self) -> Result<()> {
        self.store.remove(USER_STORAGE_KEY).await
    }

    /// Loads the persisted active rooms, normalized to at most `limit` entries.
    ///
    /// An unparseable payload yields an empty list; the stored value is left
    /// for the next write to replace.
    pub async fn load_active_rooms(&self, limit: usize) -> Result<ActiveRoomList> {
        let Some(raw) = self.store.get(ACTIVE_ROOMS_STORAGE_KEY).await? else {
            return Ok(ActiveRoomList::new(limit));
        };

        match serde_json::from_str::<Vec<ActiveRoom>>(&raw) {
            Ok(rooms) => Ok(ActiveRoomList::from_stored(rooms, limit)),
            Err(e) => {
                warn!(
                    "[SessionStore] Failed to parse active rooms from storage: {}",
                    e
                );
                Ok(ActiveRoomList::new(limit))
            }
        }
    }

    pub async fn save_active_rooms(&self, rooms: &ActiveRoomList) -> Result<()> {
        let json = serde_json::to_string(rooms.as_slice())?;
        self.store.set(ACTIVE_ROOMS_STORAGE_KEY, &json).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SpaceItem;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapStore {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for MapStore {
        async fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn remove(&self, key: &str) -> Result<()> {
            self.values.lock().unwrap().remove(key);
            Ok(())
        }
    }

    fn space(id: &str) -> SpaceItem {
        SpaceItem {
            id: id.to_string(),
            name: format!("Space {}", id),
            description: String::new(),
            image_url: String::new(),
            participant_count: 8,
            is_public: true,
        }
    }

    #[tokio::test]
    async fn test_user_round_trip() {
        let raw = Arc::new(MapStore::default());
        let store = SessionStore::new(raw.clone());

        let mut user = User::fabricate_from_email("1", "user@example.com");
        user.friend_ids = vec!["2".to_string(), "3".to_string()];
        store.save_user(&user).await.unwrap();

        let first = raw.get(USER_STORAGE_KEY).await.unwrap().unwrap();
        let loaded = store.load_user().await.unwrap().unwrap();
        assert_eq!(loaded, user);

        store.save_user(&loaded).await.unwrap();
        let second = raw.get(USER_STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_corrupt_user_is_discarded() {
        let raw = Arc::new(MapStore::default());
        raw.set(USER_STORAGE_KEY, "{not json").await.unwrap();
        let store = SessionStore::new(raw.clone());

        assert!(store.load_user().await.unwrap().is_none());
        assert!(raw.get(USER_STORAGE_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_user_without_friend_ids() {
        let raw = Arc::new(MapStore::default());
        raw.set(
            USER_STORAGE_KEY,
            r#"{"id":"5","email":"d@example.com","nickname":"D","role":"user"}"#,
        )
        .await
        .unwrap();
        let store = SessionStore::new(raw);

        let user = store.load_user().await.unwrap().unwrap();
        assert!(user.friend_ids.is_empty());
    }

    #[tokio::test]
    async fn test_active_rooms_round_trip() {
        let raw = Arc::new(MapStore::default());
        let store = SessionStore::new(raw.clone());

        let mut rooms = ActiveRoomList::default();
        rooms.enter(&space("1"), 10, 2);
        rooms.enter(&space("2"), 20, 3);
        store.save_active_rooms(&rooms).await.unwrap();

        let first = raw.get(ACTIVE_ROOMS_STORAGE_KEY).await.unwrap().unwrap();
        let loaded = store.load_active_rooms(10).await.unwrap();
        assert_eq!(loaded, rooms);

        store.save_active_rooms(&loaded).await.unwrap();
        let second = raw.get(ACTIVE_ROOMS_STORAGE_KEY).await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_corrupt_rooms_load_empty() {
        let raw = Arc::new(MapStore::default());
        raw.set(ACTIVE_ROOMS_STORAGE_KEY, "[oops").await.unwrap();
        let store = SessionStore::new(raw);

        assert!(store.load_active_rooms(10).await.unwrap().is_empty());
    }
}
