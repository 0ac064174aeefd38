//! Midpoint rotation shared by the dragon and Lévy rules.

use std::f32::consts::FRAC_PI_4;

use glam::Vec3;

use crate::math::rotate_z;

pub const MIDPOINT_TURN: f32 = FRAC_PI_4;

/// Midpoint of `a`–`b`, turned 45° about the Z axis through the origin.
///
/// The turn is about the world axis, not the segment, so a curve that does
/// not pass through the origin drifts as it refines.
#[inline]
pub fn turned_midpoint(a: Vec3, b: Vec3) -> Vec3 {
    rotate_z((a + b) * 0.5, MIDPOINT_TURN)
}
