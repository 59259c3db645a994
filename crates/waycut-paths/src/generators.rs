//! Ready-made [`PathGenerator`] implementations.

use waycut_core::{Interpolator, joint_distance};

use crate::traits::PathGenerator;

/// Adapts a closure into a [`PathGenerator`].
///
/// ```
/// use waycut_paths::{FnGenerator, PathGenerator};
///
/// let direct = FnGenerator(|a: &i32, b: &i32| Some((vec![*a, *b], (b - a).abs())));
/// assert_eq!(direct.generate_path(&2, &5), Some((vec![2, 5], 3)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnGenerator<F>(pub F);

impl<W, C, F> PathGenerator<W, C> for FnGenerator<F>
where
    F: Fn(&W, &W) -> Option<(Vec<W>, C)>,
{
    #[inline]
    fn generate_path(&self, start: &W, end: &W) -> Option<(Vec<W>, C)> {
        (self.0)(start, end)
    }
}

fn accept_all(_: &[f64]) -> bool {
    true
}

/// Straight-line joint-space generator.
///
/// Connects two configurations with [`Interpolator::interpolate`] and
/// rejects the connection if any interpolated configuration fails the
/// validity predicate (e.g. a collision check). The cost is the summed
/// [`joint_distance`] between consecutive configurations.
pub struct InterpGenerator<V = fn(&[f64]) -> bool> {
    interp: Interpolator,
    valid: V,
}

impl InterpGenerator {
    /// A generator that accepts every interpolated configuration.
    pub fn unchecked(interp: Interpolator) -> Self {
        Self {
            interp,
            valid: accept_all,
        }
    }
}

impl<V: Fn(&[f64]) -> bool> InterpGenerator<V> {
    /// A generator rejecting connections through configurations for which
    /// `valid` returns `false`.
    pub fn new(interp: Interpolator, valid: V) -> Self {
        Self { interp, valid }
    }

    #[inline]
    pub fn interpolator(&self) -> &Interpolator {
        &self.interp
    }
}

impl<V: Fn(&[f64]) -> bool> PathGenerator<Vec<f64>, f64> for InterpGenerator<V> {
    fn generate_path(&self, start: &Vec<f64>, end: &Vec<f64>) -> Option<(Vec<Vec<f64>>, f64)> {
        let mut path = match self.interp.interpolate(start, end) {
            Ok(path) => path,
            Err(e) => {
                log::trace!("interpolation failed: {e}");
                return None;
            }
        };
        if let Some(step) = path.iter().position(|c| !(self.valid)(c)) {
            log::trace!("connection rejected at step {step} of {}", path.len());
            return None;
        }

        let cost = path.windows(2).map(|w| joint_distance(&w[0], &w[1])).sum();
        // Normalization may have rewritten the endpoints by whole turns.
        if let Some(first) = path.first_mut() {
            first.clone_from(start);
        }
        if let Some(last) = path.last_mut() {
            last.clone_from(end);
        }
        Some((path, cost))
    }
}
