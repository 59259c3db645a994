use thiserror::Error;

/// Errors from joint-limit normalization.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LimitError {
    #[error("dimension mismatch: {angles} angles, {min} min limits, {max} max limits")]
    DimensionMismatch { angles: usize, min: usize, max: usize },

    #[error("joint {joint}: min limit exceeds max limit")]
    InvertedLimits { joint: usize },

    #[error("joint {joint}: angle {angle} lies outside its limits")]
    OutOfRange { joint: usize, angle: f64 },
}

/// Errors from joint-space interpolation.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum InterpError {
    #[error("dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("joint {joint}: interpolation increment must be positive and finite")]
    InvalidIncrement { joint: usize },

    #[error("joint {joint}: interpolation needs more than {limit} steps")]
    TooManySteps { joint: usize, limit: usize },

    #[error(transparent)]
    Limits(#[from] LimitError),
}
