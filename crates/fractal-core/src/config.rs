use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::{FractalError, FractalResult};

/// Hard ceiling on subdivision depth. Koch output grows ×4 per level, so
/// depth 8 on a closed triangle is already ~200k points.
pub const MAX_DEPTH: u32 = 8;

/// Hard ceiling on layer count for the layered snowflakes and bush copies.
pub const MAX_LAYERS: u32 = 16;

/// Tunables for every figure the generator can build.
///
/// Defaults are the demo page's constants. The browser can send a
/// partial override as JSON; missing fields fall back to these defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalConfig {
    pub max_depth: u32,
    pub max_layers: u32,

    /// Branch length for the radially duplicated snowflake.
    pub snowflake_radius: f32,
    /// Circumradius of the closed Koch triangle and random-peak hexagon.
    pub koch_radius: f32,
    /// Half-length of the dragon / Lévy seed segment.
    pub curve_half_width: f32,

    /// Outer radius of the jittered hex snowflake.
    pub hex_radius: f32,
    /// Fraction of `hex_radius` removed per inner layer.
    pub hex_layer_shrink: f32,
    pub fraction_jitter: f32,
    pub angle_jitter: f32,

    /// First shell radius and per-shell growth of the layered snowflake.
    pub shell_base_radius: f32,
    pub shell_step: f32,
    pub shell_deviation_min: f32,
    pub shell_deviation_max: f32,

    pub peak_height_min: f32,
    pub peak_height_max: f32,

    pub spiky_radius: f32,
    pub spiky_branches: u32,
    /// Side tick length as a fraction of `spiky_radius`.
    pub spiky_tick_ratio: f32,
    pub spiky_tick_angle: f32,

    pub stick_hex_radius: f32,
    pub stick_ring_radius: f32,
    pub stick_width: f32,
    pub stick_height: f32,
    pub stick_disc_radius: f32,
    pub stick_disc_segments: u32,

    pub bush_branch_length: f32,
    pub bush_branching_factor: u32,
    /// Bush depth is clamped to this; node count is `factor^depth`.
    pub bush_max_depth: u32,
    pub bush_angle_spread: f32,
    pub bush_shrink_min: f32,
    pub bush_shrink_max: f32,
    pub bush_ring_radius: f32,
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            max_layers: MAX_LAYERS,
            snowflake_radius: 5.0,
            koch_radius: 5.0,
            curve_half_width: 5.0,
            hex_radius: 10.0,
            hex_layer_shrink: 0.2,
            fraction_jitter: 0.05,
            angle_jitter: PI / 30.0,
            shell_base_radius: 3.0,
            shell_step: 2.0,
            shell_deviation_min: 0.5,
            shell_deviation_max: 1.0,
            peak_height_min: 0.5,
            peak_height_max: 1.5,
            spiky_radius: 5.0,
            spiky_branches: 6,
            spiky_tick_ratio: 0.4,
            spiky_tick_angle: PI / 6.0,
            stick_hex_radius: 2.0,
            stick_ring_radius: 5.0,
            stick_width: 0.2,
            stick_height: 0.5,
            stick_disc_radius: 0.8,
            stick_disc_segments: 32,
            bush_branch_length: 5.0,
            bush_branching_factor: 15,
            bush_max_depth: 4,
            bush_angle_spread: PI / 2.0,
            bush_shrink_min: 0.6,
            bush_shrink_max: 0.9,
            bush_ring_radius: 12.0,
        }
    }
}

impl FractalConfig {
    /// Reject overrides that raise a ceiling above its hard limit.
    pub fn validate(&self) -> FractalResult<()> {
        if self.max_depth > MAX_DEPTH {
            return Err(FractalError::InvalidParameter(format!(
                "max_depth {} exceeds hard limit {}",
                self.max_depth, MAX_DEPTH
            )));
        }
        if self.max_layers > MAX_LAYERS {
            return Err(FractalError::InvalidParameter(format!(
                "max_layers {} exceeds hard limit {}",
                self.max_layers, MAX_LAYERS
            )));
        }
        if self.bush_max_depth > self.max_depth {
            return Err(FractalError::InvalidParameter(format!(
                "bush_max_depth {} exceeds max_depth {}",
                self.bush_max_depth, self.max_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_ceilings_rejected() {
        assert!(FractalConfig::default().validate().is_ok());
        let deep = FractalConfig { max_depth: MAX_DEPTH + 2, ..FractalConfig::default() };
        assert!(matches!(deep.validate(), Err(FractalError::InvalidParameter(_))));
        let wide = FractalConfig { max_layers: u32::MAX, ..FractalConfig::default() };
        assert!(matches!(wide.validate(), Err(FractalError::InvalidParameter(_))));
        // lowering a ceiling is fine
        let shallow = FractalConfig { max_depth: 4, bush_max_depth: 3, ..FractalConfig::default() };
        assert!(shallow.validate().is_ok());
    }

    #[test]
    fn test_default_ceilings() {
        let config = FractalConfig::default();
        assert_eq!(config.max_depth, MAX_DEPTH);
        assert_eq!(config.max_layers, MAX_LAYERS);
        assert!(config.bush_max_depth <= config.max_depth);
    }

    #[test]
    fn test_ranges_are_ordered() {
        let config = FractalConfig::default();
        assert!(config.shell_deviation_min < config.shell_deviation_max);
        assert!(config.peak_height_min < config.peak_height_max);
        assert!(config.bush_shrink_min < config.bush_shrink_max);
    }
}
