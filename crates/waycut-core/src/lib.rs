//! **waycut-core** — angle arithmetic, joint-limit checks and joint-space
//! interpolation.
//!
//! These are the stateless building blocks used by the path generators in
//! `waycut-paths`:
//!
//! - angle wrapping and shortest-arc differences ([`normalize_angle`],
//!   [`shortest_angle_diff`], [`shortest_angle_dist_with_limits`])
//! - joint-limit normalization and checks ([`normalize_angles_into_range`],
//!   [`are_joints_within_limits`])
//! - dense straight-line interpolation between joint configurations
//!   ([`Interpolator`])

pub mod angles;
pub mod error;
pub mod interp;

pub use angles::{
    are_joints_within_limits, joint_distance, normalize_angle, normalize_angles_into_range,
    shortest_angle_diff, shortest_angle_dist, shortest_angle_dist_with_limits, sign,
};
pub use error::{InterpError, LimitError};
pub use interp::{DEFAULT_EPS, Interpolator, MAX_STEPS};
