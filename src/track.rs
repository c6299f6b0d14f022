use nalgebra as na;

pub type TrackId = u32;

/// Persistent identity for one physical object across frames.
///
/// Invariant: `dwell_frames` is 0 whenever `inside_polygon` is false,
/// and at least 1 whenever it is true.
#[derive(Debug, Clone)]
pub struct Track {
    pub id: TrackId,
    pub last_position: na::Point2<f32>,
    pub inside_polygon: bool,
    pub dwell_frames: u32,

    // consecutive frames without a matching detection
    pub frames_since_seen: u32,
}
