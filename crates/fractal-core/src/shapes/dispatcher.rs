//! Figure dispatcher: builds the figure a descriptor names into a scene.

use std::f32::consts::FRAC_PI_3;

use glam::Vec3;
use rand::Rng;

use crate::config::FractalConfig;
use crate::curve::{segment_pairs, Curve};
use crate::descriptor::{FractalDescriptor, FractalKind};
use crate::error::FractalResult;
use crate::materials::Material;
use crate::math::regular_polygon;
use crate::scene::SceneAdapter;
use crate::shapes::bush::{grow, replay, ring_offsets, BushParams};
use crate::shapes::layers::{hex_layers, shell_layers};
use crate::shapes::primitives::hex_sticks;
use crate::shapes::radial::radial_segments;
use crate::shapes::spiky::spiky_snowflake;
use crate::subdivision::{subdivide, SubdivisionRule};

/// Closed equilateral triangle of circumradius `radius`, apex up.
pub fn koch_triangle(radius: f32) -> Curve {
    let apex = Vec3::new(0.0, radius, 0.0);
    vec![
        apex,
        Vec3::new(-radius * FRAC_PI_3.sin(), -radius / 2.0, 0.0),
        Vec3::new(radius * FRAC_PI_3.sin(), -radius / 2.0, 0.0),
        apex,
    ]
}

/// Horizontal seed segment of the dragon and Lévy curves.
pub fn curve_seed(half_width: f32) -> Curve {
    vec![Vec3::new(-half_width, 0.0, 0.0), Vec3::new(half_width, 0.0, 0.0)]
}

/// Build the figure for `descriptor` and add it to `scene`.
///
/// The descriptor is assumed validated. A layered figure whose layers all
/// failed is an error, not an empty figure. Errors abort the build; items
/// already added stay in `scene`, so callers pass a staging list.
pub fn build_figure<R: Rng>(
    descriptor: &FractalDescriptor,
    config: &FractalConfig,
    rng: &mut R,
    scene: &mut impl SceneAdapter,
) -> FractalResult<()> {
    let depth = descriptor.iterations;
    match descriptor.kind {
        FractalKind::Snowflake => {
            let branch = [Vec3::ZERO, Vec3::new(0.0, config.snowflake_radius, 0.0)];
            let branch = subdivide(&branch, depth, &SubdivisionRule::KOCH, rng)?;
            scene.add_segments(&radial_segments(&branch, Vec3::ZERO, 6)?, Material::WHITE);
        }
        FractalKind::Koch => {
            let triangle = koch_triangle(config.koch_radius);
            let outline = subdivide(&triangle, depth, &SubdivisionRule::KOCH, rng)?;
            scene.add_polyline(&outline, Material::SKY_BLUE);
        }
        FractalKind::KochHex => {
            for layer in hex_layers(depth, descriptor.layers, config, rng).into_result()? {
                scene.add_segments(&layer, Material::SKY_BLUE);
            }
        }
        FractalKind::LayeredSnowflake => {
            for layer in shell_layers(depth, descriptor.layers, config, rng).into_result()? {
                scene.add_segments(&layer, Material::SKY_BLUE);
            }
        }
        FractalKind::FractalSnowflake => {
            let hexagon = regular_polygon(Vec3::ZERO, config.koch_radius, 6, true);
            let rule = SubdivisionRule::RandomPeakKoch {
                min_height: config.peak_height_min,
                max_height: config.peak_height_max,
            };
            scene.add_polyline(&subdivide(&hexagon, depth, &rule, rng)?, Material::SKY_BLUE);
        }
        FractalKind::Dragon => {
            let seed = curve_seed(config.curve_half_width);
            let curve = subdivide(&seed, depth, &SubdivisionRule::Dragon, rng)?;
            scene.add_segments(&segment_pairs(&curve), Material::RED);
        }
        FractalKind::Levy => {
            let seed = curve_seed(config.curve_half_width);
            let curve = subdivide(&seed, depth, &SubdivisionRule::Levy, rng)?;
            scene.add_segments(&segment_pairs(&curve), Material::GREEN);
        }
        FractalKind::Spiky => {
            scene.add_segments(&spiky_snowflake(depth, config), Material::WHITE);
        }
        FractalKind::HexSticks => {
            for solid in hex_sticks(config)? {
                scene.add_solid(&solid, Material::GLASS);
            }
        }
        FractalKind::Bush => {
            let params = BushParams::from_config(config);
            let mut drawn = Vec::with_capacity(params.segment_count(depth));
            let mut captured = Vec::with_capacity(drawn.capacity());
            grow(
                Vec3::ZERO,
                Vec3::Y,
                config.bush_branch_length,
                depth,
                &params,
                rng,
                &mut |segment| drawn.push(segment),
                Some(&mut captured),
            );
            scene.add_segments(&drawn, Material::GREEN);

            let offsets = ring_offsets(Vec3::ZERO, config.bush_ring_radius, descriptor.layers);
            for copy in replay(&captured, &offsets) {
                scene.add_segments(&copy, Material::GREEN);
            }
        }
    }
    tracing::debug!(kind = %descriptor.kind, depth, layers = descriptor.layers, "figure built");
    Ok(())
}
