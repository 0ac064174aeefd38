use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::FractalConfig;
use crate::descriptor::FractalDescriptor;
use crate::error::FractalResult;
use crate::scene::{DisplayList, SceneAdapter};
use crate::shapes::dispatcher::build_figure;

/// Summary of one successful regeneration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegenerationStats {
    /// Display items added to the scene.
    pub items: usize,
    /// Line vertices across all items.
    pub vertices: usize,
}

impl RegenerationStats {
    fn of(list: &DisplayList) -> Self {
        Self { items: list.len(), vertices: list.vertex_count() }
    }
}

/// Regeneration entry point.
///
/// Owns the figure configuration and the random source used by the
/// randomized rules. Each request builds into a private staging list; the
/// target scene is cleared and refilled only once the whole figure built.
pub struct FractalGenerator<R: Rng> {
    pub config: FractalConfig,
    rng: R,
}

impl<R: Rng> FractalGenerator<R> {
    pub fn new(config: FractalConfig, rng: R) -> Self {
        Self { config, rng }
    }

    /// Validate the config and `descriptor`, then build the figure into a
    /// fresh list.
    pub fn build(&mut self, descriptor: &FractalDescriptor) -> FractalResult<DisplayList> {
        self.config.validate()?;
        descriptor.validate(&self.config)?;
        let mut staging = DisplayList::new();
        build_figure(descriptor, &self.config, &mut self.rng, &mut staging)?;
        Ok(staging)
    }

    /// Replace the fractal geometry in `scene` with the figure for
    /// `descriptor`. On error `scene` is left exactly as it was.
    pub fn regenerate(
        &mut self,
        descriptor: &FractalDescriptor,
        scene: &mut impl SceneAdapter,
    ) -> FractalResult<RegenerationStats> {
        let staging = match self.build(descriptor) {
            Ok(staging) => staging,
            Err(err) => {
                tracing::error!(kind = %descriptor.kind, error = %err, "regeneration rejected");
                return Err(err);
            }
        };

        scene.clear_display();
        staging.replay_into(scene);

        let stats = RegenerationStats::of(&staging);
        tracing::info!(
            kind = %descriptor.kind,
            iterations = descriptor.iterations,
            layers = descriptor.layers,
            items = stats.items,
            vertices = stats.vertices,
            "fractal regenerated"
        );
        Ok(stats)
    }

    /// [`regenerate`](Self::regenerate) from the UI's raw selector string.
    pub fn regenerate_named(
        &mut self,
        selector: &str,
        iterations: u32,
        layers: u32,
        scene: &mut impl SceneAdapter,
    ) -> FractalResult<RegenerationStats> {
        let descriptor = match FractalDescriptor::parse(selector, iterations, layers) {
            Ok(descriptor) => descriptor,
            Err(err) => {
                tracing::error!(selector, error = %err, "regeneration rejected");
                return Err(err);
            }
        };
        self.regenerate(&descriptor, scene)
    }
}

impl FractalGenerator<StdRng> {
    /// Deterministic generator; the same seed and requests give the same
    /// figures.
    pub fn seeded(config: FractalConfig, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(config: FractalConfig) -> Self {
        Self::new(config, StdRng::from_entropy())
    }
}
