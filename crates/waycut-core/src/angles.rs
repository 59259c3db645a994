//! Angle arithmetic and joint-limit checks.
//!
//! All angles are in radians. Functions taking `min` / `max` limits assume
//! the limits describe a single revolution or less.

use std::f64::consts::{PI, TAU};

use crate::error::LimitError;

/// Wrap `angle` into `[min, max]`.
///
/// `max` is expected to be `min + 2π` (e.g. `[-π, π]` or `[0, 2π]`). Angles
/// already inside the range are returned unchanged; others land in
/// `[min, min + 2π)`.
#[inline]
pub fn normalize_angle(angle: f64, min: f64, max: f64) -> f64 {
    if (min..=max).contains(&angle) {
        return angle;
    }
    min + (angle - min).rem_euclid(TAU)
}

/// Shortest signed difference `a1 - a2`, in `[-π, π)`.
///
/// Positive when following the shortest arc from `a2` to `a1` is a
/// counter-clockwise motion.
#[inline]
pub fn shortest_angle_diff(a1: f64, a2: f64) -> f64 {
    let d = (a1 - a2 + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs.
    if d >= PI { d - TAU } else { d }
}

/// Length of the shortest arc between two angles.
#[inline]
pub fn shortest_angle_dist(a1: f64, a2: f64) -> f64 {
    shortest_angle_diff(a1, a2).abs()
}

/// Length of the arc from `a2` to `a1` that stays inside `[min, max]`.
///
/// This is the minor arc unless travelling along it from `a2` would leave
/// the limits, in which case the major arc is returned.
pub fn shortest_angle_dist_with_limits(a1: f64, a2: f64, min: f64, max: f64) -> f64 {
    let diff = shortest_angle_diff(a1, a2);
    let from = normalize_angle(a2, min, min + TAU);
    if minor_arc_leaves_limits(from, diff, min, max) {
        TAU - diff.abs()
    } else {
        diff.abs()
    }
}

#[inline]
pub(crate) fn minor_arc_leaves_limits(from: f64, diff: f64, min: f64, max: f64) -> bool {
    from + diff > max || from + diff < min
}

/// Sign of `val` as `-1`, `0` or `1`.
///
/// Unlike [`f64::signum`], zero maps to zero.
#[inline]
pub fn sign(val: f64) -> i32 {
    if val > 0.0 {
        1
    } else if val < 0.0 {
        -1
    } else {
        0
    }
}

/// Normalize every joint angle into its `[min, max]` limits in place.
///
/// Fails if the slices differ in length, if any `min` exceeds its `max`, or
/// if a normalized angle still falls outside its limits. On failure the
/// angles before the offending joint may already have been rewritten.
pub fn normalize_angles_into_range(
    angles: &mut [f64],
    min_limits: &[f64],
    max_limits: &[f64],
) -> Result<(), LimitError> {
    let dim = angles.len();
    if min_limits.len() != dim || max_limits.len() != dim {
        return Err(LimitError::DimensionMismatch {
            angles: dim,
            min: min_limits.len(),
            max: max_limits.len(),
        });
    }
    if let Some(joint) = (0..dim).find(|&i| min_limits[i] > max_limits[i]) {
        return Err(LimitError::InvertedLimits { joint });
    }

    for (joint, angle) in angles.iter_mut().enumerate() {
        let (lo, hi) = (min_limits[joint], max_limits[joint]);
        let a = normalize_angle(*angle, lo, lo + TAU);
        if a < lo || a > hi {
            return Err(LimitError::OutOfRange {
                joint,
                angle: *angle,
            });
        }
        *angle = a;
    }
    Ok(())
}

/// Whether every joint lies within its `[min, max]` limits.
///
/// Returns `false` if the slices differ in length. No normalization is
/// applied.
pub fn are_joints_within_limits(angles: &[f64], min_limits: &[f64], max_limits: &[f64]) -> bool {
    angles.len() == min_limits.len()
        && angles.len() == max_limits.len()
        && angles
            .iter()
            .zip(min_limits.iter().zip(max_limits))
            .all(|(&a, (&lo, &hi))| a >= lo && a <= hi)
}

/// Euclidean norm of the per-joint shortest angle differences.
///
/// Slices of different length are compared over their common prefix.
pub fn joint_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(&x, &y)| shortest_angle_diff(x, y).powi(2))
        .sum::<f64>()
        .sqrt()
}
