//! File-backed key-value store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hub_core::error::{HubError, Result};
use hub_core::storage::KeyValueStore;

use super::atomic_file::AtomicFile;

/// Key-value store keeping one JSON file per key in a directory.
///
/// ```text
/// <base_dir>/
/// ├── metaverse-user.json
/// └── metaverse-active-rooms.json
/// ```
///
/// File I/O runs on the blocking thread pool.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(HubError::data_access(format!("Invalid storage key: '{}'", key)));
        }
        Ok(AtomicFile::new(self.base_dir.join(format!("{}.json", key))))
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| HubError::internal(format!("Failed to join task: {}", e)))?
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        run_blocking(move || file.read()).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        let value = value.to_string();
        run_blocking(move || file.write(&value)).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        run_blocking(move || file.delete()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::storage::{SessionStore, USER_STORAGE_KEY};
    use hub_core::user::User;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_values_survive_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store.set("metaverse-user", "{}").await.unwrap();

        let reopened = FileKeyValueStore::new(temp_dir.path());
        assert_eq!(
            reopened.get("metaverse-user").await.unwrap().as_deref(),
            Some("{}")
        );
        assert!(temp_dir.path().join("metaverse-user.json").exists());
    }

    #[tokio::test]
    async fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store.set("k", "v").await.unwrap();
        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.get("k").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        let err = store.set("../escape", "v").await.unwrap_err();
        assert!(matches!(err, HubError::DataAccess(_)));
    }

    #[tokio::test]
    async fn test_session_store_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let session = SessionStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));

        let user = User::fabricate_from_email("42", "disk@example.com");
        session.save_user(&user).await.unwrap();
        assert_eq!(session.load_user().await.unwrap(), Some(user));

        session.clear_user().await.unwrap();
        assert!(session.load_user().await.unwrap().is_none());
        assert!(!temp_dir.path().join(format!("{}.json", USER_STORAGE_KEY)).exists());
    }

    #[tokio::test]
    async fn test_user_file_uses_camel_case() {
        let temp_dir = TempDir::new().unwrap();
        let session = SessionStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));

        let mut user = User::fabricate_from_email("7", "camel@example.com");
        user.friend_ids = vec!["1".to_string()];
        session.save_user(&user).await.unwrap();

        let raw = std::fs::read_to_string(temp_dir.path().join("metaverse-user.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["friendIds"], serde_json::json!(["1"]));
        assert_eq!(value["role"], "user");
        assert!(value["avatarUrl"].is_string());
    }
}
