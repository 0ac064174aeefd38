//! Curve subdivision engine.
//!
//! Every rule follows the same skeleton: each level replaces every
//! consecutive pair of the current curve with the rule's expansion, drops
//! the point shared with the next expansion, and appends the curve's final
//! point. The level loop is the unrolled form of the tail recursion, so
//! deep requests cost heap, not stack.
//!
//! Depth 0 returns the input unchanged. First and last points survive every
//! level for every rule.
pub mod koch;
pub mod midpoint;

use glam::Vec3;
use rand::Rng;

use crate::config::MAX_DEPTH;
use crate::curve::{ensure_segment, Curve};
use crate::error::{FractalError, FractalResult};
use crate::math::{jitter, uniform};
use koch::KochStep;
use midpoint::turned_midpoint;

/// A segment replacement rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SubdivisionRule {
    /// Classic Koch peak on the middle third, height scaled by `height_scale`.
    Koch { height_scale: f32 },
    /// Koch with split fractions jittered by `± fraction_jitter` and the
    /// peak angle by `± angle_jitter`, drawn per segment.
    JitteredKoch { fraction_jitter: f32, angle_jitter: f32 },
    /// Koch with the peak raised from the middle of the middle third by a
    /// height factor drawn per segment from `[min_height, max_height)`.
    RandomPeakKoch { min_height: f32, max_height: f32 },
    /// One turned midpoint inserted per segment.
    Dragon,
    /// Turned midpoint inserted and both endpoints kept per segment, so
    /// shared points appear twice.
    Levy,
}

impl SubdivisionRule {
    pub const KOCH: Self = Self::Koch { height_scale: 1.0 };

    /// Whether two calls with identical inputs may differ.
    pub fn is_randomized(&self) -> bool {
        matches!(self, Self::JitteredKoch { .. } | Self::RandomPeakKoch { .. })
    }

    /// Output points contributed per input segment.
    pub fn growth(&self) -> usize {
        match self {
            Self::Koch { .. } | Self::JitteredKoch { .. } | Self::RandomPeakKoch { .. } => 4,
            Self::Dragon => 2,
            Self::Levy => 3,
        }
    }

    /// Point count after `depth` levels on a curve of `points` points.
    pub fn point_count(&self, points: usize, depth: u32) -> usize {
        (0..depth).fold(points, |n, _| match self {
            Self::Levy => 3 * (n - 1),
            _ => self.growth() * (n - 1) + 1,
        })
    }

    fn koch_step(&self, rng: &mut impl Rng) -> KochStep {
        match *self {
            Self::Koch { height_scale } => KochStep::with_height_scale(height_scale),
            Self::JitteredKoch { fraction_jitter, angle_jitter } => KochStep {
                first: jitter(KochStep::CLASSIC.first, fraction_jitter, rng),
                second: jitter(KochStep::CLASSIC.second, fraction_jitter, rng),
                angle: jitter(KochStep::CLASSIC.angle, angle_jitter, rng),
                ..KochStep::CLASSIC
            },
            Self::RandomPeakKoch { min_height, max_height } => KochStep {
                height_scale: uniform(min_height, max_height, rng),
                from_midpoint: true,
                ..KochStep::CLASSIC
            },
            Self::Dragon | Self::Levy => KochStep::CLASSIC,
        }
    }

    /// Push the expansion of segment `index` (`a`–`b`) onto `out`, without
    /// the trailing `b` unless the rule keeps shared points.
    fn expand(
        &self,
        index: usize,
        a: Vec3,
        b: Vec3,
        out: &mut Vec<Vec3>,
        rng: &mut impl Rng,
    ) -> FractalResult<()> {
        match self {
            Self::Dragon => out.extend([a, turned_midpoint(a, b)]),
            Self::Levy => out.extend([a, turned_midpoint(a, b), b]),
            _ => {
                let points = self
                    .koch_step(rng)
                    .expand(a, b)
                    .ok_or(FractalError::ZeroLengthSegment { index })?;
                out.extend(points);
            }
        }
        Ok(())
    }
}

/// Refine `curve` by `depth` levels of `rule`.
///
/// Fails on curves without a segment, on depths above [`MAX_DEPTH`], and
/// (Koch family) on zero-length segments.
pub fn subdivide(
    curve: &[Vec3],
    depth: u32,
    rule: &SubdivisionRule,
    rng: &mut impl Rng,
) -> FractalResult<Curve> {
    ensure_segment(curve)?;
    if depth > MAX_DEPTH {
        return Err(FractalError::DepthTooLarge { depth, max: MAX_DEPTH });
    }

    let mut current: Curve = curve.to_vec();
    for level in 0..depth {
        let mut next = Vec::with_capacity(rule.point_count(current.len(), 1));
        for (index, pair) in current.windows(2).enumerate() {
            rule.expand(index, pair[0], pair[1], &mut next, rng)?;
        }
        if !matches!(rule, SubdivisionRule::Levy) {
            next.push(current[current.len() - 1]);
        }
        current = next;
        tracing::trace!(level, points = current.len(), "subdivision level");
    }
    Ok(current)
}

/// Subdivide the single segment `a`–`b`.
pub fn subdivide_segment(
    a: Vec3,
    b: Vec3,
    depth: u32,
    rule: &SubdivisionRule,
    rng: &mut impl Rng,
) -> FractalResult<Curve> {
    subdivide(&[a, b], depth, rule, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_point_count_formula_matches_output() {
        let mut rng = StdRng::seed_from_u64(7);
        let seed = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, -1.0, 0.0), Vec3::new(3.0, 2.0, 0.0)];
        for rule in [SubdivisionRule::KOCH, SubdivisionRule::Dragon, SubdivisionRule::Levy] {
            for depth in 0..4 {
                let out = subdivide(&seed, depth, &rule, &mut rng).unwrap();
                let expected = rule.point_count(seed.len(), depth);
                assert_eq!(out.len(), expected, "{:?} depth {}", rule, depth);
            }
        }
    }

    #[test]
    fn test_randomized_flag() {
        assert!(!SubdivisionRule::KOCH.is_randomized());
        assert!(!SubdivisionRule::Dragon.is_randomized());
        let jittered = SubdivisionRule::JitteredKoch { fraction_jitter: 0.05, angle_jitter: 0.1 };
        assert!(jittered.is_randomized());
    }
}
