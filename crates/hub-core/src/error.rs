//! Error types for the Metaverse Hub.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire hub.
///
/// The first four variants are the logical rejections raised by the session
/// manager. They never leave the manager in a partially mutated state and are
/// always recoverable by retrying with corrected input. The remaining variants
/// come from the storage and configuration layers.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HubError {
    /// Signup with an email that already belongs to a directory entry
    #[error("User with email '{email}' already exists")]
    DuplicateAccount { email: String },

    /// An operation that needs a current user was attempted while logged out
    #[error("You must be logged in to perform this action")]
    NotAuthenticated,

    /// Attempt to add oneself as a friend
    #[error("You cannot add yourself as a friend")]
    SelfFriendship,

    /// Attempt to re-add an existing friend
    #[error("User '{friend_id}' is already in your friends list")]
    AlreadyFriends { friend_id: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// The current user lacks the role required for the action
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (repository/storage layer)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HubError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a DuplicateAccount error
    pub fn duplicate_account(email: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            email: email.into(),
        }
    }

    /// Creates an AlreadyFriends error
    pub fn already_friends(friend_id: impl Into<String>) -> Self {
        Self::AlreadyFriends {
            friend_id: friend_id.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// True for the precondition rejections of the session manager.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::DuplicateAccount { .. }
                | Self::NotAuthenticated
                | Self::SelfFriendship
                | Self::AlreadyFriends { .. }
                | Self::NotFound { .. }
                | Self::Forbidden(_)
        )
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for HubError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for HubError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, HubError>`.
pub type Result<T> = std::result::Result<T, HubError>;
