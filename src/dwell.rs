use serde_derive::Serialize;

use crate::config::AlertMode;
use crate::track::{Track, TrackId};

/// Emitted when a track has stayed inside the geofence past the
/// configured frame threshold.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Alert {
    pub track_id: TrackId,
    pub dwell_frames: u32,
    pub message: String,
}

impl Alert {
    fn new(track_id: TrackId, dwell_frames: u32) -> Self {
        Self {
            track_id,
            dwell_frames,
            message: format!("object {track_id} inside polygon for {dwell_frames} frames"),
        }
    }
}

/// Per-track dwell bookkeeping.
///
/// A track is in one of three implicit states: outside, inside below
/// threshold, inside alerting. Entering the polygon starts the dwell
/// counter at 1; every further inside-frame increments it; leaving
/// resets it to 0. The threshold comparison is strict, so alerts
/// start on the frame where `dwell_frames` reaches `threshold + 1`.
pub struct DwellAccountant {
    threshold: u32,
    mode: AlertMode,
}

impl DwellAccountant {
    pub fn new(threshold: u32, mode: AlertMode) -> Self {
        Self { threshold, mode }
    }

    /// Folds this frame's polygon membership into the track and
    /// decides whether an alert fires.
    pub fn update(&self, track: &mut Track, inside_now: bool) -> Option<Alert> {
        if !inside_now {
            track.inside_polygon = false;
            track.dwell_frames = 0;
            return None;
        }

        if track.inside_polygon {
            track.dwell_frames += 1;
        } else {
            track.inside_polygon = true;
            track.dwell_frames = 1;
        }

        self.check(track)
    }

    /// Alert decision for a track created this frame. The store has
    /// already seeded its dwell state, so only the threshold check
    /// remains.
    pub fn admit(&self, track: &Track) -> Option<Alert> {
        self.check(track)
    }

    fn check(&self, track: &Track) -> Option<Alert> {
        if !track.inside_polygon || track.dwell_frames <= self.threshold {
            return None;
        }

        match self.mode {
            AlertMode::EveryFrame => Some(Alert::new(track.id, track.dwell_frames)),
            AlertMode::OncePerEpisode => (track.dwell_frames == self.threshold + 1)
                .then(|| Alert::new(track.id, track.dwell_frames)),
        }
    }
}
