//! Catalog entries browsed from the hub.

use serde::{Deserialize, Serialize};

/// A world map players can explore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl MapItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// A space users can enter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    /// Stated capacity of the space
    pub participant_count: u32,
    pub is_public: bool,
}

impl SpaceItem {
    /// Case-insensitive substring match on name or description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}
