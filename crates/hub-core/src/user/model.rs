//! User identity domain model.

use serde::{Deserialize, Serialize};

/// Base URL of the placeholder avatar service.
pub const AVATAR_PLACEHOLDER_BASE: &str = "https://placehold.co/100x100.png";

/// Role of an account in the hub.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// A user account record.
///
/// Serialized with camelCase keys so that a stored identity looks like
/// `{"id":"1","email":"…","nickname":"…","avatarUrl":"…","role":"user","friendIds":[]}`.
/// A payload without `friendIds` deserializes with an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque identifier, immutable once created
    pub id: String,
    pub email: String,
    pub nickname: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub role: Role,
    /// Ids this user considers friends. Never contains `id`.
    #[serde(default)]
    pub friend_ids: Vec<String>,
}

impl User {
    /// Fabricates an identity for an email that is not in the directory.
    ///
    /// Nickname is the local part of the email (`NewUser` when empty), the
    /// avatar is keyed on the first character of the email and the role is
    /// `admin` whenever the email contains the substring "admin".
    pub fn fabricate_from_email(id: impl Into<String>, email: &str) -> Self {
        let local_part = email.split('@').next().unwrap_or_default();
        let nickname = if local_part.is_empty() {
            "NewUser".to_string()
        } else {
            local_part.to_string()
        };
        let role = if email.contains("admin") {
            Role::Admin
        } else {
            Role::User
        };

        Self {
            id: id.into(),
            email: email.to_string(),
            nickname,
            avatar_url: placeholder_avatar_url(email, 'N'),
            role,
            friend_ids: Vec::new(),
        }
    }

    /// Builds a freshly signed-up identity with no friends and the `user` role.
    pub fn signed_up(id: impl Into<String>, email: &str, nickname: &str) -> Self {
        Self {
            id: id.into(),
            email: email.to_string(),
            nickname: nickname.to_string(),
            avatar_url: placeholder_avatar_url(nickname, 'S'),
            role: Role::User,
            friend_ids: Vec::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    pub fn is_friend_with(&self, other_id: &str) -> bool {
        self.friend_ids.iter().any(|id| id == other_id)
    }

    /// Drops any self reference and duplicate ids from `friend_ids`.
    ///
    /// Applied to every identity entering the manager (seed entries, stored
    /// payloads) so that the self-friendship invariant holds regardless of the
    /// source.
    pub fn normalized(mut self) -> Self {
        let own_id = self.id.clone();
        let mut seen = Vec::with_capacity(self.friend_ids.len());
        self.friend_ids.retain(|id| {
            if *id == own_id || seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
        self
    }
}

/// Placeholder avatar URL labelled with the uppercased first character of
/// `seed`, or `fallback` when `seed` is empty.
pub fn placeholder_avatar_url(seed: &str, fallback: char) -> String {
    let initial: String = seed
        .chars()
        .next()
        .unwrap_or(fallback)
        .to_uppercase()
        .collect();
    format!("{}?text={}", AVATAR_PLACEHOLDER_BASE, initial)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabricate_regular_user() {
        let user = User::fabricate_from_email("100", "newbie@example.com");
        assert_eq!(user.nickname, "newbie");
        assert_eq!(user.role, Role::User);
        assert_eq!(user.avatar_url, "https://placehold.co/100x100.png?text=N");
        assert!(user.friend_ids.is_empty());
    }

    #[test]
    fn test_fabricate_admin_by_substring() {
        let user = User::fabricate_from_email("101", "sysadmin.ops@corp.io");
        assert!(user.is_admin());
        assert_eq!(user.nickname, "sysadmin.ops");
    }

    #[test]
    fn test_fabricate_empty_local_part() {
        let user = User::fabricate_from_email("102", "@example.com");
        assert_eq!(user.nickname, "NewUser");
        assert_eq!(user.avatar_url, "https://placehold.co/100x100.png?text=@");
    }

    #[test]
    fn test_signed_up_avatar_uses_nickname() {
        let user = User::signed_up("7", "zed@example.com", "quartz");
        assert_eq!(user.avatar_url, "https://placehold.co/100x100.png?text=Q");
        assert_eq!(user.role, Role::User);

        let unnamed = User::signed_up("8", "anon@example.com", "");
        assert_eq!(unnamed.avatar_url, "https://placehold.co/100x100.png?text=S");
    }

    #[test]
    fn test_missing_friend_ids_default_to_empty() {
        let json = r#"{"id":"3","email":"b@example.com","nickname":"B","avatarUrl":"x","role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.friend_ids.is_empty());
        assert!(user.is_admin());
    }

    #[test]
    fn test_serializes_camel_case() {
        let user = User::signed_up("9", "c@example.com", "Cee");
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"avatarUrl\""));
        assert!(json.contains("\"friendIds\":[]"));
        assert!(json.contains("\"role\":\"user\""));
    }

    #[test]
    fn test_normalized_removes_self_and_duplicates() {
        let mut user = User::signed_up("1", "a@example.com", "A");
        user.friend_ids = vec!["2".into(), "1".into(), "2".into(), "3".into()];
        let user = user.normalized();
        assert_eq!(user.friend_ids, vec!["2".to_string(), "3".to_string()]);
    }
}
