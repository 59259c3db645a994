use thiserror::Error;

/// Errors reported for malformed shortcut requests.
///
/// A generator failing to connect two waypoints is not an error; see
/// [`PathGenerator`](crate::PathGenerator).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShortcutError {
    #[error("expected one cost per transition: {points} waypoints but {costs} costs")]
    ShapeMismatch { points: usize, costs: usize },

    #[error("granularity must be at least 1")]
    ZeroGranularity,
}
