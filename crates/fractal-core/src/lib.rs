//! Fractal curve generation for the snowflake demo.
//!
//! The core turns a [`FractalDescriptor`] into finished point lists and
//! hands them to a [`SceneAdapter`]; rendering stays on the caller's side.
pub mod config;
pub mod curve;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod materials;
pub mod math;
pub mod scene;
pub mod shapes;
pub mod subdivision;

pub use config::FractalConfig;
pub use curve::{Curve, Segment};
pub use descriptor::{FractalDescriptor, FractalKind};
pub use error::{FractalError, FractalResult};
pub use generator::{FractalGenerator, RegenerationStats};
pub use materials::Material;
pub use scene::{DisplayItem, DisplayList, SceneAdapter};
pub use subdivision::{subdivide, SubdivisionRule};
