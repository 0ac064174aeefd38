//! Koch-family segment expansion: split into thirds and erect a peak on the
//! middle third.

use std::f32::consts::FRAC_PI_3;

use glam::Vec3;

use crate::math::rotate_z;

/// Geometry of one Koch expansion. The randomized rules draw a fresh step
/// per segment; the classic rule uses [`KochStep::CLASSIC`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KochStep {
    /// Interpolation fraction of the first split point.
    pub first: f32,
    /// Interpolation fraction of the second split point.
    pub second: f32,
    /// Rotation applied to the middle-third direction to aim the peak.
    pub angle: f32,
    /// Peak height as a multiple of the middle-third length.
    pub height_scale: f32,
    /// Measure the peak from the middle of the middle third instead of the
    /// first split point.
    pub from_midpoint: bool,
}

impl KochStep {
    pub const CLASSIC: Self = Self {
        first: 1.0 / 3.0,
        second: 2.0 / 3.0,
        angle: FRAC_PI_3,
        height_scale: 1.0,
        from_midpoint: false,
    };

    pub fn with_height_scale(height_scale: f32) -> Self {
        Self { height_scale, ..Self::CLASSIC }
    }

    /// `[a, first, peak, second]`; the caller supplies `b` (shared with the
    /// next segment). `None` when the middle third has no direction.
    pub fn expand(&self, a: Vec3, b: Vec3) -> Option<[Vec3; 4]> {
        let one_third = a.lerp(b, self.first);
        let two_third = a.lerp(b, self.second);
        let span = two_third - one_third;
        let direction = span.try_normalize()?;
        let height = rotate_z(direction, self.angle) * (span.length() * self.height_scale);
        let base = if self.from_midpoint {
            (one_third + two_third) * 0.5
        } else {
            one_third
        };
        Some([a, one_third, base + height, two_third])
    }
}
