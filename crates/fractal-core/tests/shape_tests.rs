use fractal_core::config::FractalConfig;
use fractal_core::curve::Segment;
use fractal_core::math::{approx_eq, rotate_about};
use fractal_core::shapes::bush::{grow, replay, ring_offsets, BushParams};
use fractal_core::shapes::layers::{hex_layers, shell_layers};
use fractal_core::shapes::primitives::{hex_sticks, Solid};
use fractal_core::shapes::radial::{radial_duplicate, radial_segments};
use fractal_core::subdivision::{subdivide_segment, SubdivisionRule};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn koch_branch(depth: u32) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(0);
    let a = Vec3::new(0.0, 1.0, 0.0);
    let b = Vec3::new(0.0, 5.0, 0.0);
    subdivide_segment(a, b, depth, &SubdivisionRule::KOCH, &mut rng).unwrap()
}

fn small_bush(branching_factor: u32) -> BushParams {
    BushParams { branching_factor, angle_spread: 1.0, shrink_min: 0.6, shrink_max: 0.9 }
}

#[test]
fn test_radial_duplicate_point_count() {
    let curve = koch_branch(2);
    for steps in 1..8 {
        let figure = radial_duplicate(&curve, Vec3::ZERO, steps).unwrap();
        assert_eq!(figure.len(), curve.len() * steps as usize, "steps {}", steps);
    }
}

#[test]
fn test_radial_duplicate_is_rotationally_symmetric() {
    let curve = koch_branch(2);
    let center = Vec3::new(1.0, -2.0, 0.0);
    let steps = 6;
    let figure = radial_duplicate(&curve, center, steps).unwrap();
    let turn = std::f32::consts::TAU / steps as f32;

    for p in &figure {
        let q = rotate_about(*p, center, turn);
        assert!(
            figure.iter().any(|r| approx_eq(*r, q, 1e-3)),
            "rotated point {:?} has no image in the figure",
            q
        );
    }
}

#[test]
fn test_radial_first_copy_is_original() {
    let curve = koch_branch(1);
    let figure = radial_duplicate(&curve, Vec3::new(3.0, 3.0, 0.0), 6).unwrap();
    assert_eq!(&figure[..curve.len()], &curve[..]);
}

#[test]
fn test_radial_segments_six_copies() {
    let curve = koch_branch(2);
    let segments = radial_segments(&curve, Vec3::ZERO, 6).unwrap();
    assert_eq!(segments.len(), 6 * (curve.len() - 1));
}

#[test]
fn test_shell_layers_count_and_reproducibility() {
    let config = FractalConfig::default();
    for layers in [0, 1, 3, 6] {
        let first = shell_layers(3, layers, &config, &mut StdRng::seed_from_u64(11));
        let second = shell_layers(3, layers, &config, &mut StdRng::seed_from_u64(11));
        assert!(first.is_complete());
        assert_eq!(first.layers.len(), layers as usize);
        assert_eq!(first.layers, second.layers, "same seed must give identical shells");
    }
}

#[test]
fn test_shell_layers_grow_outward() {
    let config = FractalConfig::default();
    let report = shell_layers(0, 4, &config, &mut StdRng::seed_from_u64(12));
    for (i, layer) in report.layers.iter().enumerate() {
        let radius = config.shell_base_radius + i as f32 * config.shell_step;
        assert!((layer[0].start.length() - radius).abs() < 1e-4, "layer {} radius", i);
    }
}

#[test]
fn test_hex_layers_base_plus_inner() {
    let config = FractalConfig::default();
    let report = hex_layers(2, 3, &config, &mut StdRng::seed_from_u64(13));
    assert!(report.is_complete());
    assert_eq!(report.layers.len(), 4);
    let per_layer = 6 * 4usize.pow(2);
    for layer in &report.layers {
        assert_eq!(layer.len(), per_layer);
    }
}

#[test]
fn test_bush_segment_count_geometric_series() {
    for (b, d) in [(2u32, 1u32), (2, 4), (3, 3), (5, 2), (15, 3)] {
        let params = BushParams {
            branching_factor: b,
            angle_spread: std::f32::consts::FRAC_PI_2,
            shrink_min: 0.6,
            shrink_max: 0.9,
        };
        let mut rng = StdRng::seed_from_u64(b as u64 * 31 + d as u64);
        let mut emitted = 0usize;
        let mut captured = Vec::new();
        let mut count = |_| emitted += 1;
        grow(Vec3::ZERO, Vec3::Y, 5.0, d, &params, &mut rng, &mut count, Some(&mut captured));
        let expected = ((b as usize).pow(d) - 1) / (b as usize - 1);
        assert_eq!(emitted, expected, "b={} d={}", b, d);
        assert_eq!(captured.len(), expected);
        assert_eq!(params.segment_count(d), expected);
    }
}

#[test]
fn test_bush_capture_matches_emitted() {
    let params = small_bush(3);
    let mut rng = StdRng::seed_from_u64(21);
    let mut drawn: Vec<Segment> = Vec::new();
    let mut captured = Vec::new();
    let mut draw = |s| drawn.push(s);
    grow(Vec3::ZERO, Vec3::Y, 5.0, 3, &params, &mut rng, &mut draw, Some(&mut captured));
    assert_eq!(drawn, captured);
}

#[test]
fn test_bush_replay_translates_exactly() {
    let params = small_bush(2);
    let mut rng = StdRng::seed_from_u64(22);
    let mut captured = Vec::new();
    grow(Vec3::ZERO, Vec3::Y, 5.0, 3, &params, &mut rng, &mut |_| {}, Some(&mut captured));

    let offsets = ring_offsets(Vec3::ZERO, 12.0, 6);
    let copies = replay(&captured, &offsets);
    assert_eq!(copies.len(), 6);
    for (copy, offset) in copies.iter().zip(&offsets) {
        assert_eq!(copy.len(), captured.len());
        for (moved, original) in copy.iter().zip(&captured) {
            assert!(approx_eq(moved.start - *offset, original.start, 1e-4));
            assert!(approx_eq(moved.end - *offset, original.end, 1e-4));
        }
    }
}

#[test]
fn test_hex_sticks_layout() {
    let config = FractalConfig::default();
    let solids = hex_sticks(&config).unwrap();
    // disc + central hexagon + 6 × (hexagon + spoke) + ring
    assert_eq!(solids.len(), 1 + 6 + 6 * (6 + 1) + 6);
    assert!(matches!(solids[0], Solid::Disc { .. }));

    let rods = solids.iter().filter(|s| matches!(s, Solid::Rod { .. })).count();
    assert_eq!(rods, solids.len() - 1);

    for solid in &solids {
        let c = solid.center();
        let reach = config.stick_ring_radius + config.stick_hex_radius + 1e-4;
        assert!(c.z.abs() < 1e-6 && c.length() <= reach, "solid center {:?} out of reach", c);
    }
}

#[test]
fn test_hex_stick_hexagon_rods_match_side_length() {
    let config = FractalConfig::default();
    let solids = hex_sticks(&config).unwrap();
    // regular hexagon side equals its circumradius
    for solid in &solids[1..7] {
        let Solid::Rod { length, height, width, .. } = solid else {
            panic!("central hexagon must be rods");
        };
        assert!((length - config.stick_hex_radius).abs() < 1e-4);
        assert_eq!(*height, config.stick_height);
        assert_eq!(*width, config.stick_width);
    }
}
