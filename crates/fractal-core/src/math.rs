//! Planar geometry helpers shared by the subdivision rules and builders.
//!
//! Everything rotates about the world Z axis unless noted; the figures live
//! in the `z = 0` plane of the renderer's coordinate space.

use std::f32::consts::TAU;

use glam::{Quat, Vec3};
use rand::Rng;

/// Rotate `v` about the Z axis through the origin.
#[inline]
pub fn rotate_z(v: Vec3, angle: f32) -> Vec3 {
    Quat::from_rotation_z(angle) * v
}

/// Rotate `point` about the Z axis through `center`.
#[inline]
pub fn rotate_about(point: Vec3, center: Vec3, angle: f32) -> Vec3 {
    center + rotate_z(point - center, angle)
}

/// Point on a circle of `radius` around `center` in the XY plane.
#[inline]
pub fn ring_point(center: Vec3, radius: f32, angle: f32) -> Vec3 {
    center + Vec3::new(radius * angle.cos(), radius * angle.sin(), 0.0)
}

/// Angle of step `i` out of `steps` equal steps around a full turn.
#[inline]
pub fn step_angle(i: u32, steps: u32) -> f32 {
    i as f32 * TAU / steps as f32
}

/// Vertices of a regular polygon starting at angle 0. With `closed` the
/// first vertex is repeated at the end.
pub fn regular_polygon(center: Vec3, radius: f32, sides: u32, closed: bool) -> Vec<Vec3> {
    let mut points: Vec<Vec3> = (0..sides)
        .map(|i| ring_point(center, radius, step_angle(i, sides)))
        .collect();
    if closed {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    points
}

/// `value ± deviation`, uniform.
#[inline]
pub fn jitter(value: f32, deviation: f32, rng: &mut impl Rng) -> f32 {
    value + (rng.gen::<f32>() * 2.0 - 1.0) * deviation
}

/// Uniform draw in `[min, max)`. Collapses to `min` for an empty range.
#[inline]
pub fn uniform(min: f32, max: f32, rng: &mut impl Rng) -> f32 {
    if max > min {
        min + rng.gen::<f32>() * (max - min)
    } else {
        min
    }
}

/// Component-wise comparison within `eps`.
#[inline]
pub fn approx_eq(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).abs().max_element() <= eps
}
