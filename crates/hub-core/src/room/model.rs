//! Active room domain model.

use serde::{Deserialize, Serialize};

use crate::catalog::SpaceItem;

/// A space the user entered recently.
///
/// `room_id` is the space id. `current_players` is a display-only simulated
/// count with no authoritative occupancy behind it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveRoom {
    pub room_id: String,
    pub space_id: String,
    pub space_name: String,
    #[serde(default)]
    pub space_image_url: String,
    /// Unix timestamp in milliseconds
    pub last_activity: i64,
    pub current_players: u32,
}

impl ActiveRoom {
    pub fn for_space(space: &SpaceItem, last_activity: i64, current_players: u32) -> Self {
        Self {
            room_id: space.id.clone(),
            space_id: space.id.clone(),
            space_name: space.name.clone(),
            space_image_url: space.image_url.clone(),
            last_activity,
            current_players,
        }
    }
}

/// Upper bound for the simulated player count of a space: half its stated
/// capacity, never below one.
pub fn player_capacity(space: &SpaceItem) -> u32 {
    (space.participant_count / 2).max(1)
}
