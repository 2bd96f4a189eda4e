//! Interpolator trait definition.

use num_traits::Float;

/// One-dimensional interpolator over a fixed set of knots.
///
/// Generic over `T: Float` so the same curve logic serves `f64` and `f32`.
///
/// # Contract
///
/// - `interpolate(x)` returns a value for every finite `x`; queries outside
///   [`domain`](Interpolator::domain) are answered by the implementation's
///   boundary policy instead of an error
/// - At a knot `x_i`, `interpolate(x_i)` returns `y_i` exactly
pub trait Interpolator<T: Float> {
    /// Interpolate the value at `x`.
    fn interpolate(&self, x: T) -> T;

    /// Return the knot range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}
