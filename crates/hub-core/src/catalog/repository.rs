//! Catalog accessor traits.

use async_trait::async_trait;

use super::model::{MapItem, SpaceItem};
use crate::error::Result;

/// Read-only access to the map catalog.
///
/// Calls may suspend to simulate network latency; results are copies, so
/// callers cannot mutate the catalog through them.
#[async_trait]
pub trait MapCatalog: Send + Sync {
    async fn get_maps(&self) -> Result<Vec<MapItem>>;

    async fn get_map_by_id(&self, id: &str) -> Result<Option<MapItem>>;

    /// Maps carrying `tag` (case-insensitive).
    async fn maps_with_tag(&self, tag: &str) -> Result<Vec<MapItem>> {
        Ok(self
            .get_maps()
            .await?
            .into_iter()
            .filter(|m| m.has_tag(tag))
            .collect())
    }
}

/// Read-only access to the space catalog.
#[async_trait]
pub trait SpaceCatalog: Send + Sync {
    async fn get_spaces(&self) -> Result<Vec<SpaceItem>>;

    async fn get_space_by_id(&self, id: &str) -> Result<Option<SpaceItem>>;

    async fn search_spaces(&self, term: &str) -> Result<Vec<SpaceItem>> {
        Ok(self
            .get_spaces()
            .await?
            .into_iter()
            .filter(|s| s.matches(term))
            .collect())
    }

    async fn public_spaces(&self) -> Result<Vec<SpaceItem>> {
        Ok(self
            .get_spaces()
            .await?
            .into_iter()
            .filter(|s| s.is_public)
            .collect())
    }
}
