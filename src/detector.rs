use crate::detection::Detection;
use crate::error::{Error, Result};
use crate::frame::Frame;
use crate::scene::{FrameResult, Scene};

/// External detector collaborator. The engine never looks inside the
/// model; it only consumes the per-frame detection list.
pub trait Detector {
    type Error: std::fmt::Display;

    /// Run inference on one decoded frame image.
    fn detect(&mut self, image: &[u8], width: u32, height: u32)
        -> std::result::Result<Vec<Detection>, Self::Error>;
}

/// Couples a detector with one scene so callers can push raw frames
/// and get back boxes and alerts.
///
/// A detector failure aborts the frame before any track state is read
/// or written, so a failed frame behaves as if it never happened.
pub struct Pipeline<D: Detector> {
    detector: D,
    scene: Scene,
}

impl<D: Detector> Pipeline<D> {
    pub fn new(detector: D, scene: Scene) -> Self {
        Self { detector, scene }
    }

    pub fn process(&mut self, image: &[u8], width: u32, height: u32) -> Result<FrameResult> {
        let detections = self
            .detector
            .detect(image, width, height)
            .map_err(|e| Error::Collaborator(e.to_string()))?;

        let frame = Frame::new((width, height), detections);
        Ok(self.scene.process_frame(&frame))
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}
