//! Static map and space catalogs with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use hub_core::catalog::{MapCatalog, MapItem, SpaceCatalog, SpaceItem};
use hub_core::error::Result;

const CATALOG_IMAGE_URL: &str = "https://placehold.co/600x400.png";

/// Catalog backed by fixed seed lists.
///
/// Every accessor waits `latency` before answering and returns copies.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    maps: Vec<MapItem>,
    spaces: Vec<SpaceItem>,
    latency: Duration,
}

impl StaticCatalog {
    pub fn new(maps: Vec<MapItem>, spaces: Vec<SpaceItem>, latency: Duration) -> Self {
        Self {
            maps,
            spaces,
            latency,
        }
    }

    /// The demo catalog shipped with the hub.
    pub fn seeded(latency: Duration) -> Self {
        Self::new(seed_maps(), seed_spaces(), latency)
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn map(id: &str, name: &str, description: &str, tags: &[&str]) -> MapItem {
    MapItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: CATALOG_IMAGE_URL.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn space(id: &str, name: &str, description: &str, capacity: u32, is_public: bool) -> SpaceItem {
    SpaceItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        image_url: CATALOG_IMAGE_URL.to_string(),
        participant_count: capacity,
        is_public,
    }
}

pub fn seed_maps() -> Vec<MapItem> {
    vec![
        map(
            "1",
            "Cyber City Neo-Kyoto",
            "A sprawling futuristic city with neon lights and towering skyscrapers.",
            &["sci-fi", "city", "cyberpunk"],
        ),
        map(
            "2",
            "Ancient Desert Ruins",
            "Explore mysterious ruins and hidden treasures in a vast desert.",
            &["fantasy", "desert", "adventure"],
        ),
        map(
            "3",
            "Floating Sky Islands",
            "Magical islands floating in the sky, connected by glowing bridges.",
            &["fantasy", "sky", "magic"],
        ),
        map(
            "4",
            "Underwater Kingdom Atlantis",
            "Dive deep to discover the legendary underwater city of Atlantis.",
            &["fantasy", "underwater", "mystery"],
        ),
    ]
}

pub fn seed_spaces() -> Vec<SpaceItem> {
    vec![
        space(
            "1",
            "Pixel Art Cafe",
            "A cozy virtual cafe for pixel art enthusiasts to hang out and share creations.",
            42,
            true,
        ),
        space(
            "2",
            "Developers Den (Private)",
            "A private workspace for a team of metaverse developers.",
            8,
            false,
        ),
        space(
            "3",
            "Synthwave Sunset Club",
            "Dance the night away in a retro-futuristic club with synthwave beats.",
            120,
            true,
        ),
        space(
            "4",
            "Zen Meditation Garden",
            "Find your inner peace in this tranquil virtual garden.",
            15,
            true,
        ),
    ]
}

#[async_trait]
impl MapCatalog for StaticCatalog {
    async fn get_maps(&self) -> Result<Vec<MapItem>> {
        self.delay().await;
        Ok(self.maps.clone())
    }

    async fn get_map_by_id(&self, id: &str) -> Result<Option<MapItem>> {
        self.delay().await;
        Ok(self.maps.iter().find(|m| m.id == id).cloned())
    }
}

#[async_trait]
impl SpaceCatalog for StaticCatalog {
    async fn get_spaces(&self) -> Result<Vec<SpaceItem>> {
        self.delay().await;
        Ok(self.spaces.clone())
    }

    async fn get_space_by_id(&self, id: &str) -> Result<Option<SpaceItem>> {
        self.delay().await;
        Ok(self.spaces.iter().find(|s| s.id == id).cloned())
    }
}
