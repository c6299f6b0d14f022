use nalgebra as na;

use crate::bbox::{BBox, Ltrb};
use crate::error::{Error, Result};

/// Immutable polygon region deciding "inside" status of a track.
///
/// Built once per scene; `contains` is a pure function, so the same
/// point always yields the same answer for a fixed polygon.
#[derive(Debug, Clone)]
pub struct Geofence {
    vertices: Vec<na::Point2<f32>>,
    hull: BBox<Ltrb>,
}

impl Geofence {
    pub fn new(vertices: Vec<na::Point2<f32>>) -> Result<Self> {
        if vertices.len() < 3 {
            return Err(Error::Config(format!(
                "geofence polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let hull = BBox::hull_of(&vertices)
            .ok_or_else(|| Error::Config("geofence polygon is empty".into()))?;

        Ok(Self { vertices, hull })
    }

    pub fn from_tuples(points: &[(f32, f32)]) -> Result<Self> {
        Self::new(
            points
                .iter()
                .map(|&(x, y)| na::Point2::new(x, y))
                .collect(),
        )
    }

    #[inline]
    pub fn vertices(&self) -> &[na::Point2<f32>] {
        &self.vertices
    }

    /// Even-odd crossing test; points outside the hull are rejected
    /// without walking the edges.
    pub fn contains(&self, p: na::Point2<f32>) -> bool {
        if !self.hull.covers(p) {
            return false;
        }

        let n = self.vertices.len();
        let mut inside = false;
        let mut p1 = self.vertices[0];
        let mut xints = 0.0;

        for i in 1..=n {
            let p2 = self.vertices[i % n];

            if p.y > f32::min(p1.y, p2.y)
                && p.y <= f32::max(p1.y, p2.y)
                && p.x <= f32::max(p1.x, p2.x)
            {
                if (p1.y - p2.y).abs() > f32::EPSILON {
                    xints = (p.y - p1.y) * (p2.x - p1.x) / (p2.y - p1.y) + p1.x;
                }

                if (p1.x - p2.x).abs() < f32::EPSILON || p.x <= xints {
                    inside = !inside;
                }
            }

            p1 = p2;
        }

        inside
    }
}
