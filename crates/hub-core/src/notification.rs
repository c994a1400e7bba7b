//! Notification sink (toasts) used to report operation outcomes.

use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    #[default]
    Default,
    Destructive,
}

/// A user-visible outcome message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    /// The notification shown when an operation is rejected with `err`.
    pub fn from_error(err: &HubError) -> Self {
        match err {
            HubError::SelfFriendship => {
                Self::destructive("Cannot Add Self", "You cannot add yourself as a friend.")
            }
            HubError::AlreadyFriends { .. } => Self::info(
                "Already Friends",
                "This user is already in your friends list.",
            ),
            HubError::DuplicateAccount { .. } => Self::destructive("Signup Failed", err.to_string()),
            HubError::NotFound { .. } => Self::destructive("User Not Found", err.to_string()),
            _ => Self::destructive("Error", err.to_string()),
        }
    }
}

/// Fire-and-forget receiver of notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}
