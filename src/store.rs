use nalgebra as na;

use crate::track::{Track, TrackId};

/// In-memory table of live tracks for one scene.
///
/// Tracks are kept in creation order, so enumeration is deterministic
/// across runs for the same input. Ids come from a per-store monotonic
/// counter starting at 1; independent scenes never share ids.
pub struct TrackStore {
    tracks: Vec<Track>,
    next_id: TrackId,
}

impl TrackStore {
    pub fn new() -> Self {
        Self {
            tracks: Vec::with_capacity(64),
            next_id: 1,
        }
    }

    /// Allocates a fresh track. A track created inside the geofence
    /// starts its first dwell frame immediately.
    pub fn create(&mut self, position: na::Point2<f32>, initial_inside: bool) -> TrackId {
        let id = self.next_id;
        self.next_id += 1;

        self.tracks.push(Track {
            id,
            last_position: position,
            inside_polygon: initial_inside,
            dwell_frames: initial_inside as u32,
            frames_since_seen: 0,
        });

        id
    }

    pub fn get(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    /// Moves a track to a new centroid and marks it seen this frame.
    pub fn update_position(&mut self, id: TrackId, position: na::Point2<f32>) {
        if let Some(track) = self.get_mut(id) {
            track.last_position = position;
            track.frames_since_seen = 0;
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Called once at the start of a frame; matched tracks get their
    /// counter cleared again by `update_position`.
    pub fn age(&mut self) {
        for track in &mut self.tracks {
            track.frames_since_seen += 1;
        }
    }

    /// Drops tracks that went more than `max_missed` consecutive
    /// frames without a matching detection.
    pub fn sweep(&mut self, max_missed: u32) {
        self.tracks.retain(|t| t.frames_since_seen <= max_missed);
    }
}

impl Default for TrackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_create_inside_starts_dwelling() {
        let mut store = TrackStore::new();
        let id = store.create(na::Point2::new(1., 2.), true);
        let track = store.get(id).unwrap();

        assert!(track.inside_polygon);
        assert_eq!(track.dwell_frames, 1);
    }

    #[test]
    fn test_create_outside_starts_idle() {
        let mut store = TrackStore::new();
        let id = store.create(na::Point2::new(1., 2.), false);
        let track = store.get(id).unwrap();

        assert!(!track.inside_polygon);
        assert_eq!(track.dwell_frames, 0);
    }

    #[test]
    fn test_ids_are_monotonic() {
        let mut store = TrackStore::new();
        let a = store.create(na::Point2::new(0., 0.), false);
        let b = store.create(na::Point2::new(9., 9.), false);

        assert_eq!(a, 1);
        assert_eq!(b, 2);
    }

    #[test]
    fn test_update_position_clears_miss_counter() {
        let mut store = TrackStore::new();
        let id = store.create(na::Point2::new(0., 0.), false);

        store.age();
        store.age();
        assert_eq!(store.get(id).unwrap().frames_since_seen, 2);

        store.update_position(id, na::Point2::new(3., 4.));
        let track = store.get(id).unwrap();
        assert_eq!(track.frames_since_seen, 0);
        assert_relative_eq!(track.last_position.x, 3.0);
        assert_relative_eq!(track.last_position.y, 4.0);
    }

    #[test]
    fn test_sweep_evicts_stale_tracks() {
        let mut store = TrackStore::new();
        let stale = store.create(na::Point2::new(0., 0.), false);
        let live = store.create(na::Point2::new(9., 9.), false);

        for _ in 0..3 {
            store.age();
        }
        store.update_position(live, na::Point2::new(9., 9.));
        store.sweep(2);

        assert!(store.get(stale).is_none());
        assert!(store.get(live).is_some());
        assert_eq!(store.len(), 1);
    }
}
