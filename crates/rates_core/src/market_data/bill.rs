//! Bank-discount pricing of a Treasury bill.

use super::discount::DiscountCurve;
use crate::types::Date;

/// Day-count denominator of the bank-discount convention.
pub const BANK_DISCOUNT_BASIS: f64 = 360.0;

/// Current value of a bill with `face_value` maturing in `days_to_maturity`
/// days, discounted at `discount_rate_percent` (feed units, e.g. `2.08`).
///
/// ```text
/// price = face * (1 - rate / 100 * days / 360)
/// ```
///
/// Non-positive `days_to_maturity` returns the face value.
///
/// # Example
///
/// ```
/// use rates_core::market_data::bill_price;
///
/// // 91 days at 2.00%: 1000 * (1 - 0.02 * 91/360)
/// let price = bill_price(1000.0, 2.00, 91);
/// assert!((price - 994.944_444_444).abs() < 1e-6);
/// ```
pub fn bill_price(face_value: f64, discount_rate_percent: f64, days_to_maturity: i64) -> f64 {
    if days_to_maturity <= 0 {
        return face_value;
    }
    let days = days_to_maturity as f64;
    face_value * (1.0 - discount_rate_percent / 100.0 * days / BANK_DISCOUNT_BASIS)
}

/// Discount rate and current value of a bill priced off a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BillValuation {
    /// Face (redemption) value
    pub face_value: f64,
    /// Bill maturity date
    pub maturity_date: Date,
    /// Days from the curve reference date to maturity
    pub days_to_maturity: i64,
    /// Interpolated discount rate, in feed units (percent)
    pub discount_rate: f64,
    /// Current value
    pub price: f64,
}

impl DiscountCurve {
    /// Value a bill of `face_value` maturing on `maturity_date`.
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
    ///     .map(|&t| MaturityPoint::new(t, today.add_days(7 * t.weeks() as i64), Decimal::new(2, 0)))
    ///     .collect();
    /// let curve = DiscountCurve::new(QuoteRecord::new(today, "", points).unwrap(), today);
    ///
    /// let valuation = curve.value_bill(1000.0, today.add_days(180));
    /// assert_eq!(valuation.discount_rate, 2.0);
    /// assert!((valuation.price - 990.0).abs() < 1e-9);
    /// ```
    pub fn value_bill(&self, face_value: f64, maturity_date: Date) -> BillValuation {
        let days_to_maturity = maturity_date - self.reference_date();
        let discount_rate = self.discount_rate(maturity_date);

        BillValuation {
            face_value,
            maturity_date,
            days_to_maturity,
            discount_rate,
            price: bill_price(face_value, discount_rate, days_to_maturity),
        }
    }
}
