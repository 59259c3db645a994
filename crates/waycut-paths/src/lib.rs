//! Greedy windowed shortcutting of waypoint paths.
//!
//! Given a dense path, the cost of each transition along it, and an ordered
//! list of [`PathGenerator`]s able to propose direct connections between two
//! waypoints, [`Shortcutter`] produces a path with fewer detours whose cost,
//! as judged by a caller-supplied [`CostCompare`], is no worse than the
//! original. Feasibility is entirely the generators' concern.
//!
//! The search is generic over the waypoint type `W` and the cost type `C`
//! (any `Copy` type with `+`, `-` and a `Default` zero).
//!
//! # Example
//!
//! ```
//! use waycut_paths::{FnGenerator, LessEq, ShortcutConfig, shortcut_path};
//!
//! let path = ['A', 'B', 'C', 'D'];
//! let costs = [1, 1, 1];
//! let bridge = FnGenerator(|a: &char, b: &char| {
//!     (*a == 'A' && *b == 'D').then(|| (vec!['A', 'D'], 2))
//! });
//! let out = shortcut_path(&path, &costs, &[bridge], ShortcutConfig::default(), &LessEq).unwrap();
//! assert_eq!(out, vec!['A', 'D']);
//! ```

mod config;
mod error;
mod generators;
mod shortcut;
mod traits;

pub use config::ShortcutConfig;
pub use error::ShortcutError;
pub use generators::{FnGenerator, InterpGenerator};
pub use shortcut::{ShortcutStats, Shortcutter, segment_costs, shortcut_path};
pub use traits::{CostCompare, LessEq, PathGenerator, Tolerance};
