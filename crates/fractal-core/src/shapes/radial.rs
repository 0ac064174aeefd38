//! Radial duplication: complete a symmetric figure from one generating curve.

use glam::Vec3;

use crate::curve::{segment_pairs, Curve, Segment};
use crate::error::{FractalError, FractalResult};
use crate::math::{rotate_about, step_angle};

/// Rigid copies of `curve` rotated about `center` by `i · 2π / steps`.
pub fn radial_copies(curve: &[Vec3], center: Vec3, steps: u32) -> FractalResult<Vec<Curve>> {
    if steps == 0 {
        return Err(FractalError::InvalidParameter(
            "radial duplication needs at least one step".into(),
        ));
    }
    Ok((0..steps)
        .map(|i| {
            let angle = step_angle(i, steps);
            curve.iter().map(|&p| rotate_about(p, center, angle)).collect()
        })
        .collect())
}

/// All copies concatenated: `curve.len() * steps` points.
pub fn radial_duplicate(curve: &[Vec3], center: Vec3, steps: u32) -> FractalResult<Curve> {
    Ok(radial_copies(curve, center, steps)?.concat())
}

/// Segments of every copy, paired within each copy so copies are never
/// bridged.
pub fn radial_segments(curve: &[Vec3], center: Vec3, steps: u32) -> FractalResult<Vec<Segment>> {
    Ok(radial_copies(curve, center, steps)?
        .iter()
        .flat_map(|copy| segment_pairs(copy))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_steps_rejected() {
        assert!(radial_duplicate(&[Vec3::ZERO, Vec3::X], Vec3::ZERO, 0).is_err());
    }

    #[test]
    fn test_copies_are_not_bridged() {
        let curve = [Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 2.0, 0.0), Vec3::new(1.0, 3.0, 0.0)];
        let segments = radial_segments(&curve, Vec3::ZERO, 6).unwrap();
        assert_eq!(segments.len(), 6 * 2);
    }

    #[test]
    fn test_empty_curve_is_empty_figure() {
        assert!(radial_duplicate(&[], Vec3::ZERO, 6).unwrap().is_empty());
    }
}
