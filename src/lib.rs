pub mod associator;
pub mod bbox;
pub mod config;
pub mod detection;
pub mod detector;
pub mod dwell;
pub mod error;
pub mod frame;
pub mod geofence;
pub mod scene;
pub mod store;

mod track;

pub use config::{AlertMode, MatchPolicy, SceneConfig};
pub use detection::Detection;
pub use detector::{Detector, Pipeline};
pub use dwell::Alert;
pub use error::{Error, Result};
pub use frame::Frame;
pub use geofence::Geofence;
pub use scene::{AnnotatedBox, FrameResult, Scene};
pub use track::{Track, TrackId};

use std::collections::HashMap;

/// Multi-source dwell tracker. Every video source gets its own
/// [`Scene`] with an independent geofence, configuration and track
/// table, so streams never share mutable state.
pub struct DwellTracker {
    scenes: HashMap<String, Scene>,
}

impl DwellTracker {
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
        }
    }

    /// Registers a source. Configuration problems surface here,
    /// before any frame is processed.
    pub fn add_scene(&mut self, src: &str, geofence: Geofence, config: SceneConfig) -> Result<()> {
        let scene = Scene::new(geofence, config)?;
        self.scenes.insert(src.to_string(), scene);
        Ok(())
    }

    pub fn process(&mut self, src: &str, frame: &Frame) -> Result<FrameResult> {
        match self.scenes.get_mut(src) {
            Some(scene) => Ok(scene.process_frame(frame)),
            None => Err(Error::UnknownScene(src.to_string())),
        }
    }

    #[inline]
    pub fn scene(&self, src: &str) -> Option<&Scene> {
        self.scenes.get(src)
    }
}

impl Default for DwellTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fence() -> Geofence {
        Geofence::from_tuples(&[(100., 100.), (500., 100.), (500., 500.), (100., 500.)]).unwrap()
    }

    fn frame_at(cx: f32, cy: f32) -> Frame {
        Frame::new(
            (640, 640),
            vec![Detection::new(cx - 10., cy - 10., cx + 10., cy + 10., 0.9, 0)],
        )
    }

    #[test]
    fn test_unknown_scene_is_an_error() {
        let mut tracker = DwellTracker::new();
        assert!(matches!(
            tracker.process("cam0", &frame_at(300., 300.)),
            Err(Error::UnknownScene(_))
        ));
    }

    #[test]
    fn test_sources_are_independent() {
        let mut tracker = DwellTracker::new();
        tracker
            .add_scene("cam0", fence(), SceneConfig::new(1))
            .unwrap();
        tracker
            .add_scene("cam1", fence(), SceneConfig::new(1))
            .unwrap();

        let a = tracker.process("cam0", &frame_at(300., 300.)).unwrap();
        let b = tracker.process("cam1", &frame_at(300., 300.)).unwrap();

        // per-scene id counters both start at 1
        assert_eq!(a.boxes[0].track_id, 1);
        assert_eq!(b.boxes[0].track_id, 1);

        // only cam0 advances past the threshold
        tracker.process("cam0", &frame_at(300., 300.)).unwrap();
        let third = tracker.process("cam0", &frame_at(300., 300.)).unwrap();
        assert_eq!(third.alerts.len(), 1);
        assert_eq!(tracker.scene("cam1").unwrap().tracks()[0].dwell_frames, 1);
    }

    #[test]
    fn test_bad_config_rejected_at_registration() {
        let mut tracker = DwellTracker::new();
        let res = tracker.add_scene("cam0", fence(), SceneConfig::new(0));
        assert!(matches!(res, Err(Error::Config(_))));
        assert!(tracker.scene("cam0").is_none());
    }
}
