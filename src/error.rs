use thiserror::Error;

/// Top-level error type for the aurora path toolkit.
#[derive(Debug, Error)]
pub enum AuroraError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Spline(#[from] SplineError),

    #[error(transparent)]
    DistanceField(#[from] DistanceFieldError),

    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} must be positive and finite")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised while constructing a spline.
#[derive(Debug, Error)]
pub enum SplineError {
    #[error("not enough control points: got {count}, need at least {min}")]
    TooFewControlPoints { count: usize, min: usize },

    #[error("too many control points: got {count}, at most {max} allowed")]
    TooManyControlPoints { count: usize, max: usize },

    #[error("control point {index} is a zero-length direction")]
    DegenerateControlPoint { index: usize },
}

/// Errors related to distance field generation.
#[derive(Debug, Error)]
pub enum DistanceFieldError {
    #[error("distance field dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("distance field dimensions {width}x{height} exceed the supported maximum {max}")]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("image holds {actual} bytes, expected {expected} ({width}x{height})")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        width: usize,
        height: usize,
    },
}

/// Errors related to path rasterization.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("invalid stroke parameters: {0}")]
    InvalidStroke(String),

    #[error("raster dimensions must be non-zero, got {width}x{height}")]
    EmptyRaster { width: usize, height: usize },
}

/// Convenience type alias for results using [`AuroraError`].
pub type Result<T> = std::result::Result<T, AuroraError>;
