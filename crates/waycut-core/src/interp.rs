use std::f64::consts::TAU;

use crate::angles::{
    minor_arc_leaves_limits, normalize_angles_into_range, shortest_angle_diff, sign,
};
use crate::error::InterpError;

/// Default tolerance below which two joint angles are considered equal.
pub const DEFAULT_EPS: f64 = 1e-6;

/// Upper bound on the number of steps a single interpolation may take.
pub const MAX_STEPS: usize = 1 << 20;

/// Dense straight-line interpolation between joint configurations.
///
/// Every joint advances by at most its increment per step, travelling along
/// the shortest arc that respects its limits. Joints flagged as continuous
/// may cross their limits and are wrapped back into range after each step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interpolator {
    min_limits: Vec<f64>,
    max_limits: Vec<f64>,
    increments: Vec<f64>,
    continuous: Vec<bool>,
    eps: f64,
}

impl Interpolator {
    /// Create an interpolator with no continuous joints and
    /// [`DEFAULT_EPS`].
    pub fn new(min_limits: Vec<f64>, max_limits: Vec<f64>, increments: Vec<f64>) -> Self {
        let continuous = vec![false; increments.len()];
        Self {
            min_limits,
            max_limits,
            increments,
            continuous,
            eps: DEFAULT_EPS,
        }
    }

    /// Mark which joints are continuous (may wrap around their limits).
    pub fn with_continuous(mut self, continuous: Vec<bool>) -> Self {
        self.continuous = continuous;
        self
    }

    /// Set the equality tolerance.
    pub fn with_eps(mut self, eps: f64) -> Self {
        self.eps = eps;
        self
    }

    /// Number of joints, as given by the increments.
    #[inline]
    pub fn dim(&self) -> usize {
        self.increments.len()
    }

    /// Interpolate from `start` to `end`.
    ///
    /// Both configurations are first normalized into the joint limits. The
    /// returned path begins with the normalized `start`, ends with the
    /// normalized `end`, and always has at least two configurations for a
    /// non-empty joint vector.
    ///
    /// Fails with [`InterpError::TooManySteps`] instead of allocating when a
    /// joint would need more than [`MAX_STEPS`] increments.
    pub fn interpolate(&self, start: &[f64], end: &[f64]) -> Result<Vec<Vec<f64>>, InterpError> {
        self.check_shape(start, end)?;

        let mut from = start.to_vec();
        normalize_angles_into_range(&mut from, &self.min_limits, &self.max_limits)?;
        let mut to = end.to_vec();
        normalize_angles_into_range(&mut to, &self.min_limits, &self.max_limits)?;

        let dim = from.len();
        let mut dirs = vec![0.0; dim];
        let mut steps = 0usize;
        for i in 0..dim {
            let diff = shortest_angle_diff(to[i], from[i]);
            let blocked = !self.continuous[i]
                && minor_arc_leaves_limits(from[i], diff, self.min_limits[i], self.max_limits[i]);
            let (dir, dist) = if blocked {
                (-sign(diff), TAU - diff.abs())
            } else {
                (sign(diff), diff.abs())
            };
            dirs[i] = f64::from(dir);

            let inc = self.increments[i];
            let joint_steps = if dist <= self.eps || dist <= inc {
                1
            } else {
                let n = (dist / inc).ceil();
                // Also catches NaN from a non-finite eps or limit.
                if !(n <= MAX_STEPS as f64) {
                    return Err(InterpError::TooManySteps {
                        joint: i,
                        limit: MAX_STEPS,
                    });
                }
                n as usize
            };
            steps = steps.max(joint_steps);
        }

        let mut path = Vec::with_capacity(steps + 1);
        let mut curr = from;
        path.push(curr.clone());
        for _ in 0..steps {
            for i in 0..dim {
                let inc = self.increments[i];
                if remaining(curr[i], to[i], dirs[i]) <= inc {
                    curr[i] = to[i];
                    continue;
                }
                curr[i] += dirs[i] * inc;
                if curr[i] > self.max_limits[i] {
                    curr[i] -= TAU;
                }
                if curr[i] < self.min_limits[i] {
                    curr[i] += TAU;
                }
            }
            path.push(curr.clone());
        }
        Ok(path)
    }

    fn check_shape(&self, start: &[f64], end: &[f64]) -> Result<(), InterpError> {
        let expected = start.len();
        let lens = [
            end.len(),
            self.min_limits.len(),
            self.max_limits.len(),
            self.increments.len(),
            self.continuous.len(),
        ];
        if let Some(&found) = lens.iter().find(|&&n| n != expected) {
            return Err(InterpError::DimensionMismatch { expected, found });
        }
        let invalid = |&inc: &f64| !(inc.is_finite() && inc > 0.0);
        if let Some(joint) = self.increments.iter().position(invalid) {
            return Err(InterpError::InvalidIncrement { joint });
        }
        Ok(())
    }
}

/// Angle still to travel from `curr` to `to` moving in direction `dir`.
#[inline]
fn remaining(curr: f64, to: f64, dir: f64) -> f64 {
    if dir == 0.0 {
        return 0.0;
    }
    ((to - curr) * dir).rem_euclid(TAU)
}
