use thiserror::Error;

/// Errors returned by subdivision, figure builders and regeneration.
///
/// An empty figure is never reported through this type; every variant means
/// the request could not be honoured.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FractalError {
    /// The fractal selector does not name a known figure.
    #[error("unknown fractal type: {0}")]
    UnknownFractal(String),

    /// A curve needs at least two points to have a segment.
    #[error("degenerate curve: {points} point(s), need at least 2")]
    DegenerateCurve { points: usize },

    /// Segment `index` has coincident endpoints, so its direction is undefined.
    #[error("zero-length segment at index {index}")]
    ZeroLengthSegment { index: usize },

    #[error("depth {depth} exceeds maximum {max}")]
    DepthTooLarge { depth: u32, max: u32 },

    #[error("layer count {layers} exceeds maximum {max}")]
    TooManyLayers { layers: u32, max: u32 },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type FractalResult<T> = Result<T, FractalError>;
