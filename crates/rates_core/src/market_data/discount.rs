//! Discount rates for arbitrary dates from a quote snapshot.

use super::quote::{MaturityPoint, QuoteRecord};
use super::tenor::TENOR_COUNT;
use crate::math::interpolators::{ClampedLinearInterpolator, Interpolator};
use crate::types::Date;

/// Interpolated discount rate for `target_date`, measured from `reference_date`.
///
/// Day offsets from `reference_date` to each maturity form the knots and the
/// point rates the ordinates:
/// - on or before the 4-week maturity: the 4-week rate
/// - exactly on a maturity: that tenor's rate
/// - between two maturities: linear in days between the adjacent pair
/// - after the 52-week maturity: the 52-week rate
///
/// Pure: identical inputs always give identical output, and no input makes it
/// fail. `points` must have strictly increasing maturity dates (guaranteed by
/// [`QuoteRecord`]); otherwise the result is meaningless.
///
/// # Example
///
/// ```
/// use rates_core::market_data::{interpolate, MaturityPoint, Tenor};
/// use rates_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let today = Date::from_ymd(2024, 1, 1).unwrap();
/// let days = [28, 56, 91, 182, 364];
/// let rates = ["0.0150", "0.0160", "0.0175", "0.0200", "0.0230"];
/// let points: [MaturityPoint; 5] = std::array::from_fn(|i| {
///     MaturityPoint::new(Tenor::ALL[i], today.add_days(days[i]), rates[i].parse::<Decimal>().unwrap())
/// });
///
/// let rate = interpolate(today, &points, today.add_days(70));
/// assert!((rate - 0.0166).abs() < 1e-12);
/// ```
pub fn interpolate(
    reference_date: Date,
    points: &[MaturityPoint; TENOR_COUNT],
    target_date: Date,
) -> f64 {
    rate_knots(reference_date, points).interpolate((target_date - reference_date) as f64)
}

/// Days from `reference_date` to each maturity against the point rates.
fn rate_knots(
    reference_date: Date,
    points: &[MaturityPoint; TENOR_COUNT],
) -> ClampedLinearInterpolator<f64> {
    let days_until_maturity = points
        .iter()
        .map(|p| (p.maturity_date() - reference_date) as f64)
        .collect();
    let rates = points.iter().map(MaturityPoint::discount_rate).collect();

    // Strictly increasing maturities give strictly increasing offsets
    ClampedLinearInterpolator::from_sorted_knots(days_until_maturity, rates)
}

/// A quote snapshot anchored at a reference date.
///
/// The day-offset knots are built once, so callers that query many dates
/// against one quote (a daily schedule) avoid redoing the date arithmetic.
/// Every rate equals what [`interpolate`] gives for the same inputs.
///
/// # Example
///
/// ```
/// use rates_core::market_data::{DiscountCurve, MaturityPoint, QuoteRecord, Tenor};
/// use rates_core::types::Date;
/// use rust_decimal::Decimal;
///
/// let today = Date::from_ymd(2024, 1, 1).unwrap();
/// let points = Tenor::ALL
///     .iter()
///     .map(|&t| MaturityPoint::new(t, today.add_days(7 * t.weeks() as i64), Decimal::new(t.weeks() as i64, 2)))
///     .collect();
/// let quote = QuoteRecord::new(today, "2024-01-01T00:00:00", points).unwrap();
///
/// let curve = DiscountCurve::new(quote, today);
/// let schedule = curve.schedule(366);
/// assert_eq!(schedule.len(), 366);
/// assert_eq!(schedule[0].0, today);
/// ```
#[derive(Debug, Clone)]
pub struct DiscountCurve {
    quote: QuoteRecord,
    reference_date: Date,
    rates: ClampedLinearInterpolator<f64>,
}

impl DiscountCurve {
    /// Anchor `quote` at `reference_date`.
    pub fn new(quote: QuoteRecord, reference_date: Date) -> Self {
        let rates = rate_knots(reference_date, quote.points());
        Self {
            quote,
            reference_date,
            rates,
        }
    }

    /// The underlying quote.
    #[inline]
    pub fn quote(&self) -> &QuoteRecord {
        &self.quote
    }

    /// Date all day offsets are measured from.
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Rate knots keyed by days from the reference date to each maturity.
    #[inline]
    pub fn rate_knots(&self) -> &ClampedLinearInterpolator<f64> {
        &self.rates
    }

    /// Whether the reference date is past the shortest maturity.
    ///
    /// The rate scan still behaves (offsets just go negative), but the
    /// quote is stale relative to the anchor.
    pub fn is_stale(&self) -> bool {
        self.reference_date > self.quote.first_maturity()
    }

    /// Interpolated discount rate for `target_date`.
    pub fn discount_rate(&self, target_date: Date) -> f64 {
        self.rates.interpolate((target_date - self.reference_date) as f64)
    }

    /// Discount rate for each of the `days` calendar days starting at the
    /// reference date (offset 0 through `days - 1`).
    ///
    /// Stops early if a date would fall outside the representable range.
    pub fn schedule(&self, days: u32) -> Vec<(Date, f64)> {
        (0..i64::from(days))
            .map_while(|offset| self.reference_date.checked_add_days(offset))
            .map(|date| (date, self.discount_rate(date)))
            .collect()
    }
}
