//! Errors raised by the core value types.
//!
//! - `DateError`: a calendar date could not be built or read
//! - `InterpolationError`: knots rejected by [`ClampedLinearInterpolator`]
//!
//! [`ClampedLinearInterpolator`]: crate::math::interpolators::ClampedLinearInterpolator

use thiserror::Error;

/// A calendar date could not be built or read.
///
/// # Examples
/// ```
/// use rates_core::types::{Date, DateError};
///
/// let err = Date::from_ymd(2019, 2, 29).unwrap_err();
/// assert_eq!(err, DateError::OutOfRange { year: 2019, month: 2, day: 29 });
/// assert_eq!(err.to_string(), "No such calendar date: 2019-02-29");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Components do not name a day on the calendar.
    #[error("No such calendar date: {year:04}-{month:02}-{day:02}")]
    OutOfRange {
        /// Year
        year: i32,
        /// Month, 1-based
        month: u32,
        /// Day of month, 1-based
        day: u32,
    },

    /// Text does not match the expected layout.
    #[error("Cannot read '{input}' as {expected}: {reason}")]
    Unparseable {
        /// The rejected text
        input: String,
        /// Layout that was expected
        expected: &'static str,
        /// Parser diagnostic
        reason: String,
    },
}

/// Knots rejected while building an interpolator.
///
/// Queries never fail; only construction validates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InterpolationError {
    /// Fewer than two knots.
    #[error("Interpolation needs at least {need} knots, got {got}")]
    TooFewKnots {
        /// Knots supplied
        got: usize,
        /// Minimum accepted
        need: usize,
    },

    /// Abscissae and ordinates have different lengths.
    #[error("Knot abscissae and ordinates differ in length: {xs} vs {ys}")]
    LengthMismatch {
        /// Number of abscissae
        xs: usize,
        /// Number of ordinates
        ys: usize,
    },

    /// An abscissa is NaN or infinite.
    #[error("Knot {index} is not a finite number")]
    NonFiniteKnot {
        /// Position of the offending knot
        index: usize,
    },

    /// Abscissae are not strictly increasing.
    #[error("Knots are not strictly increasing at index {index}")]
    NonIncreasingKnots {
        /// Index of the first knot that is not above its predecessor
        index: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparseable_message_names_layout() {
        let err = DateError::Unparseable {
            input: "31/07/2019".to_string(),
            expected: "YYYY-MM-DD",
            reason: "input contains invalid characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read '31/07/2019' as YYYY-MM-DD: input contains invalid characters"
        );
    }

    #[test]
    fn test_interpolation_error_display() {
        let err = InterpolationError::NonIncreasingKnots { index: 3 };
        assert_eq!(err.to_string(), "Knots are not strictly increasing at index 3");

        let err = InterpolationError::LengthMismatch { xs: 5, ys: 4 };
        assert_eq!(
            err.to_string(),
            "Knot abscissae and ordinates differ in length: 5 vs 4"
        );
    }
}
