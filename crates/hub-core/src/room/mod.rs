//! Active room domain module.
//!
//! - `model`: Recently entered space record (`ActiveRoom`)
//! - `list`: Bounded, recency-ordered collection (`ActiveRoomList`)

mod list;
mod model;

pub use list::{ActiveRoomList, DEFAULT_ACTIVE_ROOM_LIMIT};
pub use model::{ActiveRoom, player_capacity};
