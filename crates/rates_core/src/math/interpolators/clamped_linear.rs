//! Linear interpolation with flat clamping at both ends.

use super::Interpolator;
use crate::types::InterpolationError;
use num_traits::Float;

/// Scan ascending knots for the bracket around `x` and interpolate linearly.
///
/// Boundary policy:
/// - `x <= xs[0]` returns `ys[0]` (flat floor, no extrapolation)
/// - `x == xs[i]` returns `ys[i]` exactly
/// - `xs[i-1] < x < xs[i]` returns
///   `ys[i-1] + (ys[i] - ys[i-1]) * (x - xs[i-1]) / (xs[i] - xs[i-1])`
/// - `x > xs[n-1]` returns `ys[n-1]` (flat ceiling)
///
/// The knots are trusted: `xs` must be strictly increasing and the slices of
/// equal length. Unsorted knots yield a meaningless (but finite) number rather
/// than an error. Use [`ClampedLinearInterpolator`] for a validated variant.
///
/// # Panics
///
/// Panics if `xs` or `ys` is empty.
///
/// # Example
///
/// ```
/// use rates_core::math::interpolators::clamped_linear;
///
/// let xs = [30.0_f64, 90.0];
/// let ys = [0.02_f64, 0.05];
///
/// let y = clamped_linear(&xs, &ys, 60.0);
/// assert!((y - 0.035).abs() < 1e-15);
/// ```
pub fn clamped_linear<T: Float>(xs: &[T], ys: &[T], x: T) -> T {
    if x <= xs[0] {
        return ys[0];
    }

    let mut last_x = xs[0];
    let mut last_y = ys[0];

    for (&xi, &yi) in xs.iter().zip(ys.iter()) {
        if xi < x {
            last_x = xi;
            last_y = yi;
            continue;
        }
        if xi == x {
            return yi;
        }
        return last_y + (yi - last_y) * (x - last_x) / (xi - last_x);
    }

    ys[ys.len() - 1]
}

/// Piecewise linear interpolator that clamps flat outside its knots.
///
/// Unlike a plain linear interpolator this never reports out-of-bounds
/// queries: the first and last ordinates act as floor and ceiling.
///
/// # Example
///
/// ```
/// use rates_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
///
/// let interp = ClampedLinearInterpolator::<f64>::new(&[0.0, 1.0, 2.0], &[0.0, 2.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(-5.0), 0.0);
/// assert!((interp.interpolate(0.5) - 1.0).abs() < 1e-12);
/// assert_eq!(interp.interpolate(9.0), 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct ClampedLinearInterpolator<T: Float> {
    /// Strictly increasing x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
}

impl<T: Float> ClampedLinearInterpolator<T> {
    /// Construct an interpolator from knots.
    ///
    /// Knots are taken in the given order and are not re-sorted.
    ///
    /// # Returns
    ///
    /// * `Err(InterpolationError::LengthMismatch)` - `xs` and `ys` differ in length
    /// * `Err(InterpolationError::TooFewKnots)` - Fewer than 2 knots
    /// * `Err(InterpolationError::NonFiniteKnot)` - NaN or infinite abscissa
    /// * `Err(InterpolationError::NonIncreasingKnots)` - `xs` not strictly increasing
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        if xs.len() < 2 {
            return Err(InterpolationError::TooFewKnots {
                got: xs.len(),
                need: 2,
            });
        }

        if let Some(index) = xs.iter().position(|x| !x.is_finite()) {
            return Err(InterpolationError::NonFiniteKnot { index });
        }

        if let Some(index) = (1..xs.len()).find(|&i| xs[i] <= xs[i - 1]) {
            return Err(InterpolationError::NonIncreasingKnots { index });
        }

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }

    /// Takes ownership of knots already known to satisfy [`new`](Self::new)'s
    /// checks, such as day offsets derived from a validated quote.
    pub(crate) fn from_sorted_knots(xs: Vec<T>, ys: Vec<T>) -> Self {
        debug_assert!(xs.len() >= 2 && xs.len() == ys.len());
        debug_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        Self { xs, ys }
    }

    /// Returns the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always false for a constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Float> Interpolator<T> for ClampedLinearInterpolator<T> {
    #[inline]
    fn interpolate(&self, x: T) -> T {
        clamped_linear(&self.xs, &self.ys, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // Construction
    // ========================================

    #[test]
    fn test_new_with_minimum_points() {
        let interp = ClampedLinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).unwrap();
        assert_eq!(interp.len(), 2);
        assert!(!interp.is_empty());
    }

    #[test]
    fn test_new_insufficient_data() {
        assert_eq!(
            ClampedLinearInterpolator::new(&[1.0], &[2.0]).unwrap_err(),
            InterpolationError::TooFewKnots { got: 1, need: 2 }
        );
    }

    #[test]
    fn test_new_mismatched_lengths() {
        assert_eq!(
            ClampedLinearInterpolator::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err(),
            InterpolationError::LengthMismatch { xs: 3, ys: 2 }
        );
    }

    #[test]
    fn test_new_rejects_unsorted_knots() {
        match ClampedLinearInterpolator::new(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]) {
            Err(InterpolationError::NonIncreasingKnots { index }) => assert_eq!(index, 2),
            other => panic!("Expected NonIncreasingKnots error, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_duplicate_knots() {
        let result = ClampedLinearInterpolator::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]);
        assert_eq!(
            result.unwrap_err(),
            InterpolationError::NonIncreasingKnots { index: 2 }
        );
    }

    #[test]
    fn test_new_rejects_nan_knot() {
        let result = ClampedLinearInterpolator::new(&[0.0, f64::NAN], &[0.0, 1.0]);
        assert_eq!(result.unwrap_err(), InterpolationError::NonFiniteKnot { index: 1 });
    }

    #[test]
    fn test_from_sorted_knots_matches_validated() {
        let xs = [28.0, 56.0, 91.0];
        let ys = [0.0150, 0.0160, 0.0175];
        let checked = ClampedLinearInterpolator::new(&xs, &ys).unwrap();
        let trusted = ClampedLinearInterpolator::from_sorted_knots(xs.to_vec(), ys.to_vec());

        assert_eq!(trusted.xs(), checked.xs());
        for x in [0.0, 28.0, 40.0, 91.0, 100.0] {
            assert_eq!(trusted.interpolate(x), checked.interpolate(x));
        }
    }

    // ========================================
    // Interpolation
    // ========================================

    #[test]
    fn test_domain() {
        let interp = ClampedLinearInterpolator::new(&[28.0, 91.0, 364.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(interp.domain(), (28.0, 364.0));
    }

    #[test]
    fn test_exact_at_knots() {
        let xs = [28.0, 56.0, 91.0, 182.0, 364.0];
        let ys = [0.0150, 0.0160, 0.0175, 0.0200, 0.0230];
        let interp = ClampedLinearInterpolator::new(&xs, &ys).unwrap();

        for (&x, &y) in xs.iter().zip(ys.iter()) {
            assert_eq!(interp.interpolate(x), y);
        }
    }

    #[test]
    fn test_midpoint() {
        let interp = ClampedLinearInterpolator::new(&[30.0, 90.0], &[0.02, 0.05]).unwrap();
        assert_relative_eq!(interp.interpolate(60.0), 0.035, epsilon = 1e-15);
    }

    #[test]
    fn test_clamps_below_first_knot() {
        let interp = ClampedLinearInterpolator::new(&[30.0, 90.0], &[0.02, 0.05]).unwrap();
        assert_eq!(interp.interpolate(29.0), 0.02);
        assert_eq!(interp.interpolate(-100.0), 0.02);
    }

    #[test]
    fn test_clamps_above_last_knot() {
        let interp = ClampedLinearInterpolator::new(&[30.0, 90.0], &[0.02, 0.05]).unwrap();
        assert_eq!(interp.interpolate(91.0), 0.05);
        assert_eq!(interp.interpolate(1e9), 0.05);
    }

    #[test]
    fn test_uses_adjacent_bracket_only() {
        // Between 56 and 91 only; the 28-day knot must not leak in
        let xs = [28.0, 56.0, 91.0];
        let ys = [0.0150, 0.0160, 0.0175];
        let y = clamped_linear(&xs, &ys, 70.0);
        assert_relative_eq!(y, 0.0166, epsilon = 1e-15);
    }

    #[test]
    fn test_decreasing_rates() {
        let interp = ClampedLinearInterpolator::new(&[0.0, 10.0], &[5.0, 1.0]).unwrap();
        assert_relative_eq!(interp.interpolate(2.5), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_f32() {
        let xs: [f32; 2] = [0.0, 2.0];
        let ys: [f32; 2] = [0.0, 4.0];
        let y = clamped_linear(&xs, &ys, 1.0_f32);
        assert!((y - 2.0_f32).abs() < 1e-6);
    }

    // ========================================
    // Properties
    // ========================================

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_monotonic_within_bracket(
                lo in 0.0f64..0.10,
                hi in 0.0f64..0.10,
                a in 1.0f64..89.0,
                b in 1.0f64..89.0,
            ) {
                let xs = [0.0, 90.0];
                let ys = [lo, hi];
                let (t1, t2) = if a <= b { (a, b) } else { (b, a) };

                let y1 = clamped_linear(&xs, &ys, t1);
                let y2 = clamped_linear(&xs, &ys, t2);

                if lo <= hi {
                    prop_assert!(y1 <= y2);
                } else {
                    prop_assert!(y1 >= y2);
                }
            }

            #[test]
            fn test_result_stays_within_bracket(
                lo in -0.05f64..0.10,
                hi in -0.05f64..0.10,
                x in 0.0f64..=90.0,
            ) {
                let y = clamped_linear(&[0.0, 90.0], &[lo, hi], x);
                prop_assert!(y >= lo.min(hi) - 1e-15);
                prop_assert!(y <= lo.max(hi) + 1e-15);
            }

            #[test]
            fn test_clamp_outside_knots(
                below in -1000.0f64..=10.0,
                above in 90.000_001f64..1000.0,
            ) {
                let xs = [10.0, 50.0, 90.0];
                let ys = [0.01, 0.03, 0.02];
                prop_assert_eq!(clamped_linear(&xs, &ys, below), 0.01);
                prop_assert_eq!(clamped_linear(&xs, &ys, above), 0.02);
            }
        }
    }
}
