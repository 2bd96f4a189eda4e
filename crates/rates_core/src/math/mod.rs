//! Numerical building blocks.
//!
//! - [`interpolators`]: One-dimensional interpolation over sorted knots

pub mod interpolators;
