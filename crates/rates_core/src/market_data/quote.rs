//! Quote records: one feed entry's discount rates and maturity dates.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use super::error::QuoteError;
use super::tenor::{Tenor, TENOR_COUNT};
use crate::types::Date;

/// Discount rate and maturity date of one tenor on a quote date.
///
/// The rate is held both as the exact decimal printed in the feed and as
/// its `f64` approximation. Interpolation runs on the `f64`.
///
/// # Example
///
/// ```
/// use rates_core::market_data::{MaturityPoint, Tenor};
/// use rates_core::types::Date;
///
/// let maturity = Date::from_ymd(2019, 8, 29).unwrap();
/// let point = MaturityPoint::parse(Tenor::Week4, maturity, "2.08").unwrap();
///
/// assert_eq!(point.discount().to_string(), "2.08");
/// assert_eq!(point.discount_rate(), 2.08);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MaturityPoint {
    tenor: Tenor,
    maturity_date: Date,
    discount: Decimal,
    discount_rate: f64,
}

impl MaturityPoint {
    /// Create a point from an exact decimal discount rate.
    pub fn new(tenor: Tenor, maturity_date: Date, discount: Decimal) -> Self {
        let discount_rate = discount
            .to_string()
            .parse::<f64>()
            .ok()
            .or_else(|| discount.to_f64())
            .unwrap_or(f64::NAN);

        Self {
            tenor,
            maturity_date,
            discount,
            discount_rate,
        }
    }

    /// Create a point from the textual discount value found in the feed.
    ///
    /// # Errors
    ///
    /// `QuoteError::InvalidDiscount` if `value` is not a decimal number.
    pub fn parse(tenor: Tenor, maturity_date: Date, value: &str) -> Result<Self, QuoteError> {
        let discount = Decimal::from_str(value.trim()).map_err(|_| QuoteError::InvalidDiscount {
            tenor,
            value: value.to_string(),
        })?;
        Ok(Self::new(tenor, maturity_date, discount))
    }

    /// Tenor of the bill.
    #[inline]
    pub fn tenor(&self) -> Tenor {
        self.tenor
    }

    /// Date the bill matures.
    #[inline]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Exact discount rate as quoted.
    #[inline]
    pub fn discount(&self) -> Decimal {
        self.discount
    }

    /// Floating-point discount rate used for interpolation.
    #[inline]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }
}

/// The most recent feed entry: a quote date plus one point per tenor.
///
/// Built once per fetch and immutable afterwards. Construction guarantees
/// that there is exactly one point per [`Tenor`], in ascending tenor order,
/// with strictly increasing maturity dates.
///
/// # Example
///
/// ```
/// use rates_core::market_data::{MaturityPoint, QuoteRecord, Tenor};
/// use rates_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let quote_date = Date::from_ymd(2019, 7, 31).unwrap();
/// let points: Vec<_> = Tenor::ALL
///     .iter()
///     .map(|&t| MaturityPoint::new(t, quote_date.add_days(7 * t.weeks() as i64), Decimal::ONE))
///     .collect();
///
/// let quote = QuoteRecord::new(quote_date, "2019-07-31T00:00:00", points).unwrap();
/// assert_eq!(quote.point(Tenor::Week13).tenor(), Tenor::Week13);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QuoteRecord {
    quote_date: Date,
    quote_timestamp: String,
    points: [MaturityPoint; TENOR_COUNT],
}

impl QuoteRecord {
    /// Assemble a quote, validating its shape.
    ///
    /// # Errors
    ///
    /// * `QuoteError::WrongPointCount` - not exactly five points
    /// * `QuoteError::TenorOrder` - tenors repeated or out of order
    /// * `QuoteError::MaturityOrder` - maturity dates not strictly increasing
    pub fn new(
        quote_date: Date,
        quote_timestamp: impl Into<String>,
        points: Vec<MaturityPoint>,
    ) -> Result<Self, QuoteError> {
        let points: [MaturityPoint; TENOR_COUNT] =
            points
                .try_into()
                .map_err(|rejected: Vec<MaturityPoint>| QuoteError::WrongPointCount {
                    got: rejected.len(),
                    need: TENOR_COUNT,
                })?;

        for pair in points.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.tenor <= prev.tenor {
                return Err(QuoteError::TenorOrder {
                    previous: prev.tenor,
                    next: next.tenor,
                });
            }
            if next.maturity_date <= prev.maturity_date {
                return Err(QuoteError::MaturityOrder {
                    tenor: next.tenor,
                    maturity: next.maturity_date,
                    previous: prev.maturity_date,
                });
            }
        }

        Ok(Self {
            quote_date,
            quote_timestamp: quote_timestamp.into(),
            points,
        })
    }

    /// Calendar date of the quote.
    #[inline]
    pub fn quote_date(&self) -> Date {
        self.quote_date
    }

    /// Raw feed timestamp the quote was selected by.
    #[inline]
    pub fn quote_timestamp(&self) -> &str {
        &self.quote_timestamp
    }

    /// All points, shortest tenor first.
    #[inline]
    pub fn points(&self) -> &[MaturityPoint; TENOR_COUNT] {
        &self.points
    }

    /// The point for `tenor`.
    pub fn point(&self, tenor: Tenor) -> &MaturityPoint {
        // Construction pins points to Tenor::ALL order
        &self.points[tenor as usize]
    }

    /// Shortest-tenor maturity date.
    pub fn first_maturity(&self) -> Date {
        self.points[0].maturity_date
    }

    /// Longest-tenor maturity date.
    pub fn last_maturity(&self) -> Date {
        self.points[TENOR_COUNT - 1].maturity_date
    }
}
