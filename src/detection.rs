use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

use crate::bbox::{BBox, Ltrb};
use crate::error::Error;

/// One detector output for one frame: corner-format bounding box,
/// confidence and class id. Lives only for the duration of that
/// frame's processing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Detection {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    #[serde(rename = "p")]
    pub confidence: f32,
    #[serde(rename = "c")]
    pub class: i32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32, class: i32) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            confidence,
            class,
        }
    }

    #[inline(always)]
    pub fn bbox(&self) -> BBox<Ltrb> {
        BBox::ltrb(self.x1, self.y1, self.x2, self.y2)
    }

    #[inline]
    pub fn centroid(&self) -> na::Point2<f32> {
        self.bbox().center()
    }

    /// Rejects degenerate boxes and boxes outside the frame.
    /// A rejected detection is skipped; it never touches track state.
    pub fn validate(&self, dims: (u32, u32)) -> Result<(), Error> {
        if !(self.x1 < self.x2 && self.y1 < self.y2) {
            return Err(Error::InvalidDetection(format!(
                "degenerate box ({}, {}, {}, {})",
                self.x1, self.y1, self.x2, self.y2
            )));
        }

        let (fw, fh) = (dims.0 as f32, dims.1 as f32);
        if self.x1 < 0. || self.y1 < 0. || self.x2 > fw || self.y2 > fh {
            return Err(Error::InvalidDetection(format!(
                "box ({}, {}, {}, {}) outside frame {}x{}",
                self.x1, self.y1, self.x2, self.y2, dims.0, dims.1
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_centroid() {
        let det = Detection::new(100., 100., 500., 500., 0.9, 2);
        let c = det.centroid();

        assert_relative_eq!(c.x, 300.0);
        assert_relative_eq!(c.y, 300.0);
    }

    #[test]
    fn test_validate_ok() {
        let det = Detection::new(10., 10., 50., 80., 0.9, 0);
        assert!(det.validate((640, 480)).is_ok());
    }

    #[test]
    fn test_validate_degenerate() {
        let det = Detection::new(50., 10., 50., 80., 0.9, 0);
        assert!(matches!(
            det.validate((640, 480)),
            Err(Error::InvalidDetection(_))
        ));

        let det = Detection::new(10., 80., 50., 10., 0.9, 0);
        assert!(det.validate((640, 480)).is_err());
    }

    #[test]
    fn test_validate_out_of_frame() {
        let det = Detection::new(600., 10., 700., 80., 0.9, 0);
        assert!(det.validate((640, 480)).is_err());

        let det = Detection::new(-5., 10., 50., 80., 0.9, 0);
        assert!(det.validate((640, 480)).is_err());
    }
}
