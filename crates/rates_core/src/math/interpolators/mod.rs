//! Interpolation methods for discount-rate curves.
//!
//! ## Available Interpolators
//!
//! - [`ClampedLinearInterpolator`]: Piecewise linear interpolation with flat
//!   clamping below the first knot and above the last knot
//! - [`clamped_linear`]: The same scan as a free function over borrowed slices
//!
//! ## Core Trait
//!
//! All 1D interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> T`: Compute the interpolated value (never fails)
//! - `domain() -> (T, T)`: Return the knot range
//!
//! ## Example
//!
//! ```
//! use rates_core::math::interpolators::{ClampedLinearInterpolator, Interpolator};
//!
//! let days = [28.0_f64, 56.0, 91.0];
//! let rates = [1.50_f64, 1.60, 1.75];
//!
//! let interp = ClampedLinearInterpolator::new(&days, &rates).unwrap();
//! assert_eq!(interp.domain(), (28.0, 91.0));
//!
//! // Flat below the first knot
//! assert_eq!(interp.interpolate(7.0), 1.50);
//! // Flat above the last knot
//! assert_eq!(interp.interpolate(400.0), 1.75);
//! ```

mod clamped_linear;
mod traits;

pub use clamped_linear::{clamped_linear, ClampedLinearInterpolator};
pub use traits::Interpolator;
