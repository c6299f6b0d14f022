use serde_derive::Serialize;
use tracing::{debug, warn};

use crate::associator::Associator;
use crate::config::SceneConfig;
use crate::detection::Detection;
use crate::dwell::{Alert, DwellAccountant};
use crate::error::Result;
use crate::frame::Frame;
use crate::geofence::Geofence;
use crate::store::TrackStore;
use crate::track::{Track, TrackId};

/// One detection annotated with the track it resolved to.
#[derive(Serialize, Debug, Clone)]
pub struct AnnotatedBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub confidence: f32,
    pub class: i32,
    pub track_id: TrackId,
}

impl AnnotatedBox {
    fn new(det: &Detection, track_id: TrackId) -> Self {
        Self {
            x1: det.x1,
            y1: det.y1,
            x2: det.x2,
            y2: det.y2,
            confidence: det.confidence,
            class: det.class,
            track_id,
        }
    }
}

/// Everything the engine produced for one frame. Box order follows
/// input detection order; alert order follows processing order.
#[derive(Serialize, Debug, Clone, Default)]
pub struct FrameResult {
    pub boxes: Vec<AnnotatedBox>,
    pub alerts: Vec<Alert>,
}

/// Tracking state for one video source: the geofence, the live track
/// table and the dwell bookkeeping tying them together.
///
/// `process_frame` takes `&mut self`, so two frames of one scene can
/// never interleave; callers feeding a scene from multiple threads
/// wrap it in their own lock and must not hold that lock across
/// detector inference.
pub struct Scene {
    geofence: Geofence,
    store: TrackStore,
    associator: Associator,
    dwell: DwellAccountant,
    max_missed_frames: u32,
    frame_no: u64,
}

impl Scene {
    pub fn new(geofence: Geofence, config: SceneConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            geofence,
            store: TrackStore::new(),
            associator: Associator::new(config.distance_gate, config.match_policy),
            dwell: DwellAccountant::new(config.dwell_threshold, config.alert_mode),
            max_missed_frames: config.max_missed_frames,
            frame_no: 0,
        })
    }

    /// Runs one frame through associate + dwell accounting, in input
    /// order. Malformed detections are skipped without touching track
    /// state; stale tracks are swept once at the end of the frame.
    pub fn process_frame(&mut self, frame: &Frame) -> FrameResult {
        self.frame_no += 1;
        self.store.age();

        let mut result = FrameResult::default();

        for det in frame.iter() {
            if let Err(err) = det.validate(frame.dims) {
                warn!(frame = self.frame_no, %err, "skipping detection");
                continue;
            }

            let centroid = det.centroid();
            let inside = self.geofence.contains(centroid);
            let (id, is_new) = self.associator.associate(&mut self.store, centroid, inside);

            let alert = match self.store.get_mut(id) {
                Some(track) if is_new => {
                    debug!(
                        track = id,
                        x = f64::from(centroid.x),
                        y = f64::from(centroid.y),
                        "new track"
                    );
                    self.dwell.admit(track)
                }
                Some(track) => self.dwell.update(track, inside),
                None => None,
            };

            result.boxes.push(AnnotatedBox::new(det, id));

            if let Some(alert) = alert {
                debug!(
                    track = alert.track_id,
                    dwell = alert.dwell_frames,
                    "dwell alert"
                );
                result.alerts.push(alert);
            }
        }

        self.store.sweep(self.max_missed_frames);

        result
    }

    #[inline]
    pub fn tracks(&self) -> &[Track] {
        self.store.as_slice()
    }

    #[inline]
    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }

    #[inline]
    pub fn frame_no(&self) -> u64 {
        self.frame_no
    }
}
