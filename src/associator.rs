use nalgebra as na;

use crate::config::MatchPolicy;
use crate::store::TrackStore;
use crate::track::TrackId;

/// Assigns each detection centroid to an existing track or creates a
/// new one. Matching is greedy per detection: within one frame, a
/// track already moved by an earlier detection is matched at its new
/// position.
pub struct Associator {
    distance_gate: f32,
    policy: MatchPolicy,
}

impl Associator {
    pub fn new(distance_gate: f32, policy: MatchPolicy) -> Self {
        Self {
            distance_gate,
            policy,
        }
    }

    /// Returns the resolved track id and whether it was just created.
    /// The matched track's position moves to the detection centroid;
    /// an unmatched detection becomes a new track at that centroid.
    pub fn associate(
        &self,
        store: &mut TrackStore,
        centroid: na::Point2<f32>,
        initial_inside: bool,
    ) -> (TrackId, bool) {
        if let Some(id) = self.find_match(store, centroid) {
            store.update_position(id, centroid);
            (id, false)
        } else {
            (store.create(centroid, initial_inside), true)
        }
    }

    // Gate comparison is strict: a detection exactly at the gate
    // distance starts a new track.
    fn find_match(&self, store: &TrackStore, centroid: na::Point2<f32>) -> Option<TrackId> {
        let gated = store
            .iter()
            .map(|t| (t.id, na::distance(&t.last_position, &centroid)))
            .filter(|&(_, dist)| dist < self.distance_gate);

        match self.policy {
            MatchPolicy::FirstUnderGate => gated.map(|(id, _)| id).next(),
            MatchPolicy::ClosestUnderGate => gated
                .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(id, _)| id),
        }
    }
}
