//! Spiky snowflake: straight rays decorated with fixed-angle side ticks.
//! Single level; the tick count is the only thing that scales.

use glam::Vec3;

use crate::config::FractalConfig;
use crate::curve::Segment;
use crate::math::{ring_point, rotate_z, step_angle};

/// One ray from `start` along unit `direction`, with `ticks` pairs of side
/// ticks at offsets `length / (ticks + 1) · i`.
pub fn spiky_ray(
    start: Vec3,
    direction: Vec3,
    length: f32,
    ticks: u32,
    config: &FractalConfig,
) -> Vec<Segment> {
    let tick_length = config.spiky_radius * config.spiky_tick_ratio;
    let left = rotate_z(direction, config.spiky_tick_angle);
    let right = rotate_z(direction, -config.spiky_tick_angle);

    let mut segments = Vec::with_capacity(1 + 2 * ticks as usize);
    segments.push(Segment::new(start, start + direction * length));
    for i in 1..=ticks {
        let base = start + direction * (length / (ticks + 1) as f32 * i as f32);
        segments.push(Segment::new(base, base + left * tick_length));
        segments.push(Segment::new(base, base + right * tick_length));
    }
    segments
}

/// `spiky_branches` rays around the origin.
pub fn spiky_snowflake(ticks: u32, config: &FractalConfig) -> Vec<Segment> {
    (0..config.spiky_branches)
        .flat_map(|i| {
            let direction = ring_point(Vec3::ZERO, 1.0, step_angle(i, config.spiky_branches));
            spiky_ray(Vec3::ZERO, direction, config.spiky_radius, ticks, config)
        })
        .collect()
}
