use glam::Vec3;

use crate::error::{FractalError, FractalResult};

/// Ordered point sequence. Order defines the drawn path; a closed curve
/// repeats its first point as its last.
pub type Curve = Vec<Vec3>;

/// One disconnected line segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

impl Segment {
    pub fn new(start: Vec3, end: Vec3) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    pub fn offset(&self, by: Vec3) -> Self {
        Self::new(self.start + by, self.end + by)
    }
}

/// Fails with `DegenerateCurve` unless the curve has a segment.
pub fn ensure_segment(curve: &[Vec3]) -> FractalResult<()> {
    if curve.len() < 2 {
        return Err(FractalError::DegenerateCurve { points: curve.len() });
    }
    Ok(())
}

/// Consecutive point pairs of `curve` as segments.
pub fn segment_pairs(curve: &[Vec3]) -> Vec<Segment> {
    curve.windows(2).map(|w| Segment::new(w[0], w[1])).collect()
}
