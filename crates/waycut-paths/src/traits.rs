/// A strategy proposing a direct connection between two waypoints.
///
/// On success the returned path must begin with `start` and end with `end`
/// (both inclusive), and its cost must be on the same scale as the costs
/// the [`CostCompare`] in use expects. Returning `None` only removes this
/// generator from the current comparison; it is not an error.
pub trait PathGenerator<W, C> {
    fn generate_path(&self, start: &W, end: &W) -> Option<(Vec<W>, C)>;
}

impl<W, C, G: PathGenerator<W, C> + ?Sized> PathGenerator<W, C> for &G {
    #[inline]
    fn generate_path(&self, start: &W, end: &W) -> Option<(Vec<W>, C)> {
        (**self).generate_path(start, end)
    }
}

impl<W, C, G: PathGenerator<W, C> + ?Sized> PathGenerator<W, C> for Box<G> {
    #[inline]
    fn generate_path(&self, start: &W, end: &W) -> Option<(Vec<W>, C)> {
        (**self).generate_path(start, end)
    }
}

/// Acceptance test between a candidate cost and the cost it would replace.
///
/// `leq(a, b)` means "`a` is an acceptable replacement for `b`". It need not
/// be a total order and may embed a tolerance.
pub trait CostCompare<C> {
    fn leq(&self, a: &C, b: &C) -> bool;
}

impl<C, F: Fn(&C, &C) -> bool> CostCompare<C> for F {
    #[inline]
    fn leq(&self, a: &C, b: &C) -> bool {
        self(a, b)
    }
}

/// Plain `a <= b` through [`PartialOrd`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LessEq;

impl<C: PartialOrd> CostCompare<C> for LessEq {
    #[inline]
    fn leq(&self, a: &C, b: &C) -> bool {
        a <= b
    }
}

/// `a <= b + tolerance` on `f64` costs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tolerance(pub f64);

impl CostCompare<f64> for Tolerance {
    #[inline]
    fn leq(&self, a: &f64, b: &f64) -> bool {
        *a <= *b + self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Direct;

    impl PathGenerator<i32, i32> for Direct {
        fn generate_path(&self, start: &i32, end: &i32) -> Option<(Vec<i32>, i32)> {
            Some((vec![*start, *end], (end - start).abs()))
        }
    }

    #[test]
    fn boxed_and_borrowed_generators_delegate() {
        let boxed: Vec<Box<dyn PathGenerator<i32, i32>>> = vec![Box::new(Direct)];
        assert_eq!(boxed[0].generate_path(&1, &4), Some((vec![1, 4], 3)));
        let borrowed: [&dyn PathGenerator<i32, i32>; 1] = [&Direct];
        assert_eq!(borrowed[0].generate_path(&4, &1), Some((vec![4, 1], 3)));
    }

    #[test]
    fn comparators() {
        assert!(LessEq.leq(&2, &2));
        assert!(!LessEq.leq(&2.5, &2.0));
        assert!(Tolerance(0.5).leq(&2.5, &2.0));
        assert!(!Tolerance(0.1).leq(&2.5, &2.0));
        let strict = |a: &i32, b: &i32| a < b;
        assert!(!strict.leq(&2, &2));
        assert!(strict.leq(&1, &2));
    }
}
