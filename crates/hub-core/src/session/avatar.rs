//! Ephemeral avatar uploads.
//!
//! An uploaded avatar is not stored durably. It is kept in memory and
//! addressed by a `blob:` URL that stays resolvable only while the registry
//! that minted it is alive.

use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

/// Scheme and authority of minted avatar URLs.
pub const AVATAR_URL_PREFIX: &str = "blob:metaverse-hub/";

/// An image chosen by the user as their new avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Default)]
pub struct AvatarRegistry {
    files: Mutex<HashMap<String, AvatarFile>>,
}

impl AvatarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps `file` in memory and returns its display URL.
    pub fn register(&self, file: AvatarFile) -> String {
        let url = format!("{}{}", AVATAR_URL_PREFIX, Uuid::new_v4());
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(url.clone(), file);
        url
    }

    pub fn resolve(&self, url: &str) -> Option<AvatarFile> {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(url)
            .cloned()
    }

    pub fn revoke(&self, url: &str) {
        self.files
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_resolve_revoke() {
        let registry = AvatarRegistry::new();
        let file = AvatarFile::new("me.png", vec![1, 2, 3]).with_content_type("image/png");

        let url = registry.register(file.clone());
        assert!(url.starts_with(AVATAR_URL_PREFIX));
        assert_eq!(registry.resolve(&url), Some(file));

        registry.revoke(&url);
        assert!(registry.resolve(&url).is_none());
    }

    #[test]
    fn test_urls_are_unique() {
        let registry = AvatarRegistry::new();
        let a = registry.register(AvatarFile::new("a.png", vec![]));
        let b = registry.register(AvatarFile::new("a.png", vec![]));
        assert_ne!(a, b);
    }
}
