use thiserror::Error;

/// Top-level error type for the cliparc kernel.
#[derive(Debug, Error)]
pub enum CliparcError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error(transparent)]
    Boolean(#[from] BooleanError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to periodic curve construction and normalization.
#[derive(Debug, Error)]
pub enum CurveError {
    #[error("a periodic curve requires at least one simplex")]
    Empty,

    #[error("period gap at simplex {index}: expected start {expected}, found {found}")]
    PeriodGap {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("simplex {index} has a non-positive period span")]
    EmptySpan { index: usize },

    #[error("curve has zero total length, periods cannot be redistributed")]
    ZeroPerimeter,
}

/// Errors related to boolean combination of curves.
#[derive(Debug, Error)]
pub enum BooleanError {
    #[error("boolean traversal failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`CliparcError`].
pub type Result<T> = std::result::Result<T, CliparcError>;
