/// Composite figure builders.
///
/// Radial duplication, layering, the branching bush, the spiky and
/// hex-stick snowflakes, and a dispatcher that builds the figure a
/// descriptor selects.
pub mod primitives;
pub mod radial;
pub mod layers;
pub mod bush;
pub mod spiky;
pub mod dispatcher;
