use nalgebra as na;
use serde::{Deserialize, Serialize};
use serde_derive::{Deserialize, Serialize};
use std::marker::PhantomData;

pub trait BBoxFormat: std::fmt::Debug {}

/// Left-top-right-bottom format, contains left top and right bottom corners
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Ltrb;
impl BBoxFormat for Ltrb {}

/// X-y-width-height format, contains coordinates of the center of bbox and width-height
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Xywh;
impl BBoxFormat for Xywh {}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BBox<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq>(
    [f32; 4],
    PhantomData<F>,
);

impl<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq> From<BBox<F>> for [f32; 4] {
    fn from(bbox: BBox<F>) -> Self {
        bbox.0
    }
}

impl<F: BBoxFormat + Serialize + Deserialize<'static> + PartialEq> BBox<F> {
    #[inline]
    pub fn as_slice(&self) -> &[f32; 4] {
        &self.0
    }
}

impl BBox<Ltrb> {
    #[inline]
    pub fn ltrb(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    /// Axis-aligned hull of a point set. Returns `None` for an empty set.
    pub fn hull_of(points: &[na::Point2<f32>]) -> Option<Self> {
        let first = points.first()?;
        let mut hull = [first.x, first.y, first.x, first.y];

        for p in &points[1..] {
            hull[0] = hull[0].min(p.x);
            hull[1] = hull[1].min(p.y);
            hull[2] = hull[2].max(p.x);
            hull[3] = hull[3].max(p.y);
        }

        Some(BBox(hull, Default::default()))
    }

    #[inline(always)]
    pub fn left(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn top(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn right(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn bottom(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn center(&self) -> na::Point2<f32> {
        na::Point2::new(
            (self.left() + self.right()) / 2.,
            (self.top() + self.bottom()) / 2.,
        )
    }

    #[inline]
    pub fn covers(&self, p: na::Point2<f32>) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    #[inline]
    pub fn as_xywh(&self) -> BBox<Xywh> {
        self.into()
    }
}

impl BBox<Xywh> {
    #[inline]
    pub fn xywh(x1: f32, x2: f32, x3: f32, x4: f32) -> Self {
        BBox([x1, x2, x3, x4], Default::default())
    }

    #[inline(always)]
    pub fn x(&self) -> f32 {
        self.0[0]
    }

    #[inline(always)]
    pub fn y(&self) -> f32 {
        self.0[1]
    }

    #[inline(always)]
    pub fn width(&self) -> f32 {
        self.0[2]
    }

    #[inline(always)]
    pub fn height(&self) -> f32 {
        self.0[3]
    }

    #[inline]
    pub fn as_ltrb(&self) -> BBox<Ltrb> {
        self.into()
    }
}

impl From<&BBox<Ltrb>> for BBox<Xywh> {
    fn from(b: &BBox<Ltrb>) -> Self {
        BBox::xywh(
            (b.left() + b.right()) / 2.,
            (b.top() + b.bottom()) / 2.,
            b.right() - b.left(),
            b.bottom() - b.top(),
        )
    }
}

impl From<&BBox<Xywh>> for BBox<Ltrb> {
    fn from(b: &BBox<Xywh>) -> Self {
        let w2 = b.width() / 2.;
        let h2 = b.height() / 2.;

        BBox::ltrb(b.x() - w2, b.y() - h2, b.x() + w2, b.y() + h2)
    }
}
