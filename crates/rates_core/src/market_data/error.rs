//! Quote construction errors.

use super::tenor::Tenor;
use crate::types::Date;
use thiserror::Error;

/// Errors raised while assembling a [`QuoteRecord`](super::QuoteRecord).
///
/// Construction refuses any quote that fails one of these checks.
///
/// # Examples
///
/// ```
/// use rates_core::market_data::QuoteError;
///
/// let err = QuoteError::WrongPointCount { got: 4, need: 5 };
/// assert_eq!(err.to_string(), "Quote must have exactly 5 maturity points, got 4");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuoteError {
    /// Not exactly one point per tenor.
    #[error("Quote must have exactly {need} maturity points, got {got}")]
    WrongPointCount {
        /// Number of points provided
        got: usize,
        /// Required number of points
        need: usize,
    },

    /// Tenors out of ascending order or repeated.
    #[error("Tenors must be strictly increasing: {previous} followed by {next}")]
    TenorOrder {
        /// Tenor of the earlier point
        previous: Tenor,
        /// Tenor of the point that broke the order
        next: Tenor,
    },

    /// Maturity dates not strictly increasing with tenor.
    #[error("Maturity of {tenor} ({maturity}) is not after the previous maturity ({previous})")]
    MaturityOrder {
        /// Tenor whose maturity broke the order
        tenor: Tenor,
        /// Its maturity date
        maturity: Date,
        /// Maturity date of the preceding tenor
        previous: Date,
    },

    /// Tenor label not in the fixed tenor set.
    #[error("Unknown tenor: {0}")]
    UnknownTenor(String),

    /// Discount value that is not a decimal number.
    #[error("Invalid discount rate for {tenor}: '{value}'")]
    InvalidDiscount {
        /// Tenor the value belongs to
        tenor: Tenor,
        /// The raw value
        value: String,
    },
}
