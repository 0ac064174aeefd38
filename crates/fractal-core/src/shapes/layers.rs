//! Layering: repeat a figure at several radii / deviations.
//!
//! Layers never depend on each other. A layer that fails is logged and
//! reported, and the remaining layers still build.

use std::f32::consts::FRAC_PI_3;

use glam::Vec3;
use rand::Rng;

use crate::config::FractalConfig;
use crate::curve::Segment;
use crate::error::{FractalError, FractalResult};
use crate::math::uniform;
use crate::shapes::radial::radial_segments;
use crate::subdivision::{subdivide_segment, SubdivisionRule};

/// Hexagonal symmetry of every layered snowflake.
pub const LAYER_SYMMETRY: u32 = 6;

/// Built layers in order, plus the index and error of each failed layer.
#[derive(Debug)]
pub struct LayerReport<T> {
    pub layers: Vec<T>,
    pub failures: Vec<(u32, FractalError)>,
}

impl<T> LayerReport<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// The built layers. Fails with the first layer error when layers were
    /// requested and none built, so a blank figure is never a success.
    pub fn into_result(self) -> FractalResult<Vec<T>> {
        match self.failures.into_iter().next() {
            Some((_, err)) if self.layers.is_empty() => Err(err),
            _ => Ok(self.layers),
        }
    }
}

/// Run `build_one` for layer indices `0..count`, isolating failures.
pub fn build_layers<T, F>(count: u32, mut build_one: F) -> LayerReport<T>
where
    F: FnMut(u32) -> FractalResult<T>,
{
    let mut report = LayerReport {
        layers: Vec::with_capacity(count as usize),
        failures: Vec::new(),
    };
    for index in 0..count {
        match build_one(index) {
            Ok(layer) => report.layers.push(layer),
            Err(err) => {
                tracing::warn!(layer = index, error = %err, "layer skipped");
                report.failures.push((index, err));
            }
        }
    }
    report
}

/// One side of a hexagon of circumradius `radius`: from the top vertex to
/// the lower-right one.
pub fn hex_side(radius: f32) -> (Vec3, Vec3) {
    (
        Vec3::new(0.0, radius, 0.0),
        Vec3::new(radius * FRAC_PI_3.sin(), -radius / 2.0, 0.0),
    )
}

fn layer_segments(
    radius: f32,
    depth: u32,
    rule: &SubdivisionRule,
    rng: &mut impl Rng,
) -> FractalResult<Vec<Segment>> {
    if radius <= 0.0 {
        return Err(FractalError::InvalidParameter(format!(
            "layer radius {radius} is not positive"
        )));
    }
    let (start, end) = hex_side(radius);
    let side = subdivide_segment(start, end, depth, rule, rng)?;
    radial_segments(&side, Vec3::ZERO, LAYER_SYMMETRY)
}

/// Outer layer plus `inner` layers.
fn hex_layer_count(inner: u32) -> u32 {
    inner.saturating_add(1)
}

/// Jittered hex snowflake: the outer layer at `hex_radius` plus `inner`
/// layers shrinking by `hex_layer_shrink` of the radius each.
pub fn hex_layers(
    depth: u32,
    inner: u32,
    config: &FractalConfig,
    rng: &mut impl Rng,
) -> LayerReport<Vec<Segment>> {
    let rule = SubdivisionRule::JitteredKoch {
        fraction_jitter: config.fraction_jitter,
        angle_jitter: config.angle_jitter,
    };
    build_layers(hex_layer_count(inner), |i| {
        let radius = config.hex_radius * (1.0 - i as f32 * config.hex_layer_shrink);
        layer_segments(radius, depth, &rule, rng)
    })
}

/// Nested Koch shells growing outward, each with its own peak deviation.
pub fn shell_layers(
    depth: u32,
    count: u32,
    config: &FractalConfig,
    rng: &mut impl Rng,
) -> LayerReport<Vec<Segment>> {
    build_layers(count, |i| {
        let radius = config.shell_base_radius + i as f32 * config.shell_step;
        let deviation = uniform(config.shell_deviation_min, config.shell_deviation_max, rng);
        tracing::debug!(layer = i, radius, deviation, "shell layer");
        layer_segments(radius, depth, &SubdivisionRule::Koch { height_scale: deviation }, rng)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_failed_layer_does_not_block_others() {
        let report = build_layers(4, |i| {
            if i == 2 {
                Err(FractalError::InvalidParameter("bad draw".into()))
            } else {
                Ok(i)
            }
        });
        assert_eq!(report.layers, vec![0, 1, 3]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].0, 2);
    }

    #[test]
    fn test_hex_layers_collapse_past_zero_radius() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = FractalConfig::default();
        // shrink 0.2 per layer: layer 5 has radius 0, layer 6 negative
        let report = hex_layers(1, 6, &config, &mut rng);
        assert_eq!(report.layers.len(), 5);
        assert_eq!(report.failures.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_into_result_fails_only_when_nothing_built() {
        let partial = build_layers(3, |i| {
            if i == 0 {
                Err(FractalError::InvalidParameter("bad draw".into()))
            } else {
                Ok(i)
            }
        });
        assert_eq!(partial.into_result(), Ok(vec![1, 2]));

        let none: LayerReport<u32> =
            build_layers(2, |i| Err(FractalError::InvalidParameter(format!("layer {i}"))));
        assert_eq!(
            none.into_result(),
            Err(FractalError::InvalidParameter("layer 0".into()))
        );

        let empty: LayerReport<u32> = build_layers(0, |_| unreachable!());
        assert_eq!(empty.into_result(), Ok(vec![]));
    }

    #[test]
    fn test_hex_layer_count_saturates() {
        assert_eq!(hex_layer_count(0), 1);
        assert_eq!(hex_layer_count(3), 4);
        assert_eq!(hex_layer_count(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_hex_side_lies_on_circumcircle() {
        let (start, end) = hex_side(10.0);
        assert!((start.length() - 10.0).abs() < 1e-4);
        assert!((end.length() - 10.0).abs() < 1e-4);
    }
}
