//! Stochastic branching bush.
//!
//! The branch tree is never stored: each branch is emitted as soon as it is
//! created. A flat capture of the segments can be replayed at other offsets
//! to plant identical bushes without re-running the random growth.

use glam::{Quat, Vec3};
use rand::Rng;

use crate::config::FractalConfig;
use crate::curve::Segment;
use crate::math::{ring_point, step_angle, uniform};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BushParams {
    /// Children spawned per branch.
    pub branching_factor: u32,
    /// Width of the uniform window for both perturbation angles.
    pub angle_spread: f32,
    pub shrink_min: f32,
    pub shrink_max: f32,
}

impl BushParams {
    pub fn from_config(config: &FractalConfig) -> Self {
        Self {
            branching_factor: config.bush_branching_factor,
            angle_spread: config.bush_angle_spread,
            shrink_min: config.bush_shrink_min,
            shrink_max: config.bush_shrink_max,
        }
    }

    /// Segments emitted by [`grow`] at `depth`: `(b^d - 1) / (b - 1)`.
    pub fn segment_count(&self, depth: u32) -> usize {
        let b = self.branching_factor as usize;
        (0..depth).fold(0, |total, level| total + b.pow(level))
    }
}

/// Grow one branch and its descendants.
///
/// No-op at `depth == 0`. Otherwise emits `start → start + direction·length`,
/// records it into `capture` if given, then spawns `branching_factor`
/// children from the branch end with the direction turned about world Y
/// and then world X by independent draws from `± spread/2`, and the length
/// shrunk by a factor from `[shrink_min, shrink_max)`.
pub fn grow<R, F>(
    start: Vec3,
    direction: Vec3,
    length: f32,
    depth: u32,
    params: &BushParams,
    rng: &mut R,
    emit: &mut F,
    mut capture: Option<&mut Vec<Segment>>,
) where
    R: Rng,
    F: FnMut(Segment),
{
    if depth == 0 {
        return;
    }

    let end = start + direction * length;
    let segment = Segment::new(start, end);
    emit(segment);
    if let Some(list) = capture.as_deref_mut() {
        list.push(segment);
    }

    for _ in 0..params.branching_factor {
        let yaw = params.angle_spread * (rng.gen::<f32>() - 0.5);
        let pitch = params.angle_spread * (rng.gen::<f32>() - 0.5);
        let yawed = Quat::from_rotation_y(yaw) * direction;
        let child_direction = Quat::from_rotation_x(pitch) * yawed;
        let child_length = length * uniform(params.shrink_min, params.shrink_max, rng);
        grow(
            end,
            child_direction,
            child_length,
            depth - 1,
            params,
            rng,
            emit,
            capture.as_deref_mut(),
        );
    }
}

/// `count` offsets evenly spaced on a circle around `center`.
pub fn ring_offsets(center: Vec3, radius: f32, count: u32) -> Vec<Vec3> {
    (0..count).map(|i| ring_point(center, radius, step_angle(i, count))).collect()
}

/// The captured bush translated to each offset, one list per offset.
pub fn replay(capture: &[Segment], offsets: &[Vec3]) -> Vec<Vec<Segment>> {
    offsets
        .iter()
        .map(|&offset| capture.iter().map(|s| s.offset(offset)).collect())
        .collect()
}
