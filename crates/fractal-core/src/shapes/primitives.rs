//! Volumetric primitives and the hex-stick snowflake built from them.

use glam::{Quat, Vec3};

use crate::config::FractalConfig;
use crate::error::{FractalError, FractalResult};
use crate::math::{regular_polygon, ring_point, step_angle};

/// A filled primitive handed to `SceneAdapter::add_solid`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Solid {
    /// Box of `length × height × width` centered at `center`; `rotation`
    /// maps local +X onto the rod axis.
    Rod { center: Vec3, length: f32, height: f32, width: f32, rotation: Quat },
    /// Flat disc in the XY plane.
    Disc { center: Vec3, radius: f32, segments: u32 },
}

impl Solid {
    pub fn center(&self) -> Vec3 {
        match self {
            Self::Rod { center, .. } | Self::Disc { center, .. } => *center,
        }
    }
}

/// Rod spanning `start`–`end`.
pub fn rod_between(start: Vec3, end: Vec3, height: f32, width: f32) -> FractalResult<Solid> {
    let axis = (end - start).try_normalize().ok_or_else(|| {
        FractalError::InvalidParameter(format!("rod endpoints coincide at {start}"))
    })?;
    Ok(Solid::Rod {
        center: (start + end) * 0.5,
        length: start.distance(end),
        height,
        width,
        rotation: Quat::from_rotation_arc(Vec3::X, axis),
    })
}

fn hexagon_rods(
    center: Vec3,
    radius: f32,
    config: &FractalConfig,
    out: &mut Vec<Solid>,
) -> FractalResult<()> {
    let corners = regular_polygon(center, radius, 6, true);
    for w in corners.windows(2) {
        out.push(rod_between(w[0], w[1], config.stick_height, config.stick_width)?);
    }
    Ok(())
}

/// Glass hex-stick snowflake: a central disc and hexagon, six outer
/// hexagons on a ring, spokes to each outer center and a ring joining
/// neighbouring centers.
pub fn hex_sticks(config: &FractalConfig) -> FractalResult<Vec<Solid>> {
    const BRANCHES: u32 = 6;
    let mut solids = vec![Solid::Disc {
        center: Vec3::ZERO,
        radius: config.stick_disc_radius,
        segments: config.stick_disc_segments,
    }];

    hexagon_rods(Vec3::ZERO, config.stick_hex_radius, config, &mut solids)?;

    let outer: Vec<Vec3> = (0..BRANCHES)
        .map(|i| ring_point(Vec3::ZERO, config.stick_ring_radius, step_angle(i, BRANCHES)))
        .collect();
    for &center in &outer {
        hexagon_rods(center, config.stick_hex_radius, config, &mut solids)?;
        solids.push(rod_between(Vec3::ZERO, center, config.stick_height, config.stick_width)?);
    }
    for (i, &start) in outer.iter().enumerate() {
        let end = outer[(i + 1) % outer.len()];
        solids.push(rod_between(start, end, config.stick_height, config.stick_width)?);
    }
    Ok(solids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rod_points_along_segment() {
        let start = Vec3::new(1.0, 1.0, 0.0);
        let end = Vec3::new(1.0, 4.0, 0.0);
        let rod = rod_between(start, end, 0.5, 0.2).unwrap();
        let Solid::Rod { center, length, rotation, .. } = rod else {
            panic!("expected a rod");
        };
        assert!((length - 3.0).abs() < 1e-6);
        assert!((center - Vec3::new(1.0, 2.5, 0.0)).length() < 1e-6);
        let axis = rotation * Vec3::X;
        assert!((axis - Vec3::Y).length() < 1e-5, "rod axis {:?}", axis);
    }

    #[test]
    fn test_rod_rejects_coincident_endpoints() {
        assert!(rod_between(Vec3::ONE, Vec3::ONE, 0.5, 0.2).is_err());
    }
}
