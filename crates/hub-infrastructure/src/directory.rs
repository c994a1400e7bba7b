//! In-memory user directory seeded with the demo accounts.

use async_trait::async_trait;
use hub_core::error::Result;
use hub_core::user::{Role, User, UserDirectory, placeholder_avatar_url};
use tokio::sync::RwLock;

/// Directory of known users held in memory.
///
/// Owned by whoever builds the session manager; there is no global instance.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserDirectory {
    /// Creates a directory from `users`.
    ///
    /// Later entries with an id already present are dropped, and each entry's
    /// `friend_ids` is normalized.
    pub fn new(users: Vec<User>) -> Self {
        let mut unique: Vec<User> = Vec::with_capacity(users.len());
        for user in users {
            if unique.iter().any(|u| u.id == user.id) {
                tracing::warn!("[UserDirectory] Skipping duplicate id {}", user.id);
                continue;
            }
            unique.push(user.normalized());
        }
        Self {
            users: RwLock::new(unique),
        }
    }

    /// The demo directory shipped with the hub.
    pub fn seeded() -> Self {
        Self::new(seed_users())
    }
}

fn seed_user(id: &str, email: &str, nickname: &str, role: Role, friend_ids: &[&str]) -> User {
    User {
        id: id.to_string(),
        email: email.to_string(),
        nickname: nickname.to_string(),
        avatar_url: placeholder_avatar_url(nickname, 'U'),
        role,
        friend_ids: friend_ids.iter().map(|id| id.to_string()).collect(),
    }
}

/// Demo accounts. Some friendships are reciprocal, some are not.
pub fn seed_users() -> Vec<User> {
    vec![
        seed_user("1", "user@example.com", "MetaUser", Role::User, &["2", "3"]),
        seed_user("2", "friend.alpha@example.com", "FriendAlpha", Role::User, &["1"]),
        seed_user("3", "beta.user@example.com", "BetaUser", Role::User, &["1", "4"]),
        seed_user("4", "gamma.explorer@example.com", "GammaExplorer", Role::User, &["3"]),
        seed_user("5", "delta.creator@example.com", "DeltaCreator", Role::User, &[]),
        seed_user("adminUser", "admin@example.com", "AdminBoss", Role::Admin, &["1"]),
    ]
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn list_all(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }

    async fn update(&self, user: &User) -> Result<bool> {
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(entry) => {
                *entry = user.clone().normalized();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
