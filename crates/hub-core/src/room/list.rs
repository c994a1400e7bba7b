//! Bounded, recency-ordered list of active rooms.

use super::model::ActiveRoom;
use crate::catalog::SpaceItem;

/// Number of rooms kept when no limit is configured.
pub const DEFAULT_ACTIVE_ROOM_LIMIT: usize = 10;

/// Recently entered rooms, most recent first.
///
/// Invariants held after every mutation:
/// - at most `limit` entries
/// - at most one entry per `space_id`
/// - `last_activity` strictly descending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveRoomList {
    entries: Vec<ActiveRoom>,
    limit: usize,
}

impl ActiveRoomList {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit: limit.max(1),
        }
    }

    /// Rebuilds a list from a stored payload.
    ///
    /// Stored data is untrusted: duplicates keep their most recent entry, the
    /// order is re-established and the tail beyond `limit` is dropped. Tied
    /// stamps are lowered below their predecessor in stored order.
    pub fn from_stored(stored: Vec<ActiveRoom>, limit: usize) -> Self {
        let mut list = Self::new(limit);
        for room in stored {
            match list.entries.iter_mut().find(|r| r.space_id == room.space_id) {
                Some(existing) if existing.last_activity >= room.last_activity => {}
                Some(existing) => *existing = room,
                None => list.entries.push(room),
            }
        }
        list.sort_and_truncate();
        list
    }

    /// Records an entry into `space` at `now`.
    ///
    /// An existing entry for the space is replaced (refreshed timestamp and
    /// player count); otherwise a new entry is created. The timestamp is bumped
    /// past the newest other entry when the clock has not advanced, which keeps
    /// the ordering strict. Returns the stored entry.
    pub fn enter(&mut self, space: &SpaceItem, now: i64, current_players: u32) -> &ActiveRoom {
        let newest_other = self
            .entries
            .iter()
            .filter(|r| r.space_id != space.id)
            .map(|r| r.last_activity)
            .max();
        let stamp = match newest_other {
            Some(newest) if newest >= now => newest + 1,
            _ => now,
        };

        self.entries.retain(|r| r.space_id != space.id);
        self.entries
            .insert(0, ActiveRoom::for_space(space, stamp, current_players));
        self.sort_and_truncate();
        &self.entries[0]
    }

    /// Pulls stamps later than `now` back to `now`.
    ///
    /// Entries stored under a skewed clock would otherwise stay pinned at the
    /// top and push every later entry to `newest + 1`.
    pub fn clamp_to(&mut self, now: i64) {
        for room in &mut self.entries {
            room.last_activity = room.last_activity.min(now);
        }
        self.sort_and_truncate();
    }

    pub fn get(&self, space_id: &str) -> Option<&ActiveRoom> {
        self.entries.iter().find(|r| r.space_id == space_id)
    }

    pub fn as_slice(&self) -> &[ActiveRoom] {
        &self.entries
    }

    pub fn to_vec(&self) -> Vec<ActiveRoom> {
        self.entries.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    fn sort_and_truncate(&mut self) {
        self.entries
            .sort_by(|a, b| b.last_activity.cmp(&a.last_activity));
        for i in 1..self.entries.len() {
            let ceiling = self.entries[i - 1].last_activity - 1;
            if self.entries[i].last_activity > ceiling {
                self.entries[i].last_activity = ceiling;
            }
        }
        self.entries.truncate(self.limit);
    }
}

impl Default for ActiveRoomList {
    fn default() -> Self {
        Self::new(DEFAULT_ACTIVE_ROOM_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space(id: &str) -> SpaceItem {
        SpaceItem {
            id: id.to_string(),
            name: format!("Space {}", id),
            description: String::new(),
            image_url: "https://placehold.co/600x400.png".to_string(),
            participant_count: 20,
            is_public: true,
        }
    }

    #[test]
    fn test_enter_inserts_at_front() {
        let mut list = ActiveRoomList::default();
        list.enter(&space("1"), 1_000, 3);
        list.enter(&space("2"), 2_000, 4);

        let ids: Vec<_> = list.as_slice().iter().map(|r| r.space_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(list.as_slice()[0].room_id, "2");
    }

    #[test]
    fn test_reentering_refreshes_single_entry() {
        let mut list = ActiveRoomList::default();
        list.enter(&space("1"), 1_000, 3);
        list.enter(&space("2"), 2_000, 4);
        list.enter(&space("1"), 3_000, 7);

        assert_eq!(list.len(), 2);
        let room = list.get("1").unwrap();
        assert_eq!(room.last_activity, 3_000);
        assert_eq!(room.current_players, 7);
        assert_eq!(list.as_slice()[0].space_id, "1");
    }

    #[test]
    fn test_evicts_oldest_beyond_limit() {
        let mut list = ActiveRoomList::default();
        for i in 0..15 {
            list.enter(&space(&i.to_string()), 1_000 + i, 1);
        }

        assert_eq!(list.len(), DEFAULT_ACTIVE_ROOM_LIMIT);
        assert!(list.get("0").is_none());
        assert!(list.get("4").is_none());
        assert_eq!(list.as_slice()[0].space_id, "14");
        assert_eq!(list.as_slice()[9].space_id, "5");
    }

    #[test]
    fn test_same_instant_keeps_strict_order() {
        let mut list = ActiveRoomList::default();
        list.enter(&space("1"), 5_000, 1);
        list.enter(&space("2"), 5_000, 1);
        list.enter(&space("3"), 4_000, 1);

        let stamps: Vec<_> = list.as_slice().iter().map(|r| r.last_activity).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(list.as_slice()[0].space_id, "3");
    }

    #[test]
    fn test_from_stored_normalizes() {
        let stored = vec![
            ActiveRoom::for_space(&space("1"), 100, 1),
            ActiveRoom::for_space(&space("2"), 300, 1),
            ActiveRoom::for_space(&space("1"), 200, 2),
        ];
        let list = ActiveRoomList::from_stored(stored, 10);

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].space_id, "2");
        assert_eq!(list.get("1").unwrap().last_activity, 200);

        let tied = vec![
            ActiveRoom::for_space(&space("a"), 100, 1),
            ActiveRoom::for_space(&space("b"), 100, 1),
            ActiveRoom::for_space(&space("c"), 100, 1),
        ];
        let list = ActiveRoomList::from_stored(tied, 10);
        let stamps: Vec<_> = list.as_slice().iter().map(|r| r.last_activity).collect();
        assert_eq!(stamps, vec![100, 99, 98]);
        let order: Vec<_> = list.as_slice().iter().map(|r| r.space_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);

        let many: Vec<_> = (0..12)
            .map(|i| ActiveRoom::for_space(&space(&i.to_string()), i, 1))
            .collect();
        assert_eq!(ActiveRoomList::from_stored(many, 10).len(), 10);
    }

    #[test]
    fn test_clamp_to_pulls_future_stamps_back() {
        let stored = vec![
            ActiveRoom::for_space(&space("future"), 9_000, 1),
            ActiveRoom::for_space(&space("past"), 1_000, 1),
        ];
        let mut list = ActiveRoomList::from_stored(stored, 10);
        list.clamp_to(5_000);

        assert_eq!(list.get("future").unwrap().last_activity, 5_000);
        assert_eq!(list.get("past").unwrap().last_activity, 1_000);

        let room = list.enter(&space("next"), 6_000, 1);
        assert_eq!(room.last_activity, 6_000);
    }
}
