//! Calendar dates and day counts.
//!
//! Every quantity on the discount curve is a whole number of calendar days
//! between two dates, so [`Date`] only needs construction, parsing of the
//! two textual layouts in use, day shifting and signed day differences.
//!
//! # Examples
//!
//! ```
//! use rates_core::types::time::Date;
//!
//! let quote = Date::parse_feed_timestamp("2019-07-31T00:00:00").unwrap();
//! let maturity = Date::parse_feed_timestamp("2019-08-29T00:00:00").unwrap();
//!
//! assert_eq!(maturity - quote, 29);
//! ```

use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime};

use super::error::DateError;

/// Layout of command-line and display dates.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Timestamp pattern used by every date field in the rate feed.
///
/// The pattern is zero-padded and fixed-width, so two timestamps compare
/// chronologically under plain string ordering.
pub const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A day on the proleptic Gregorian calendar.
///
/// Quote dates, maturity dates and reference dates are all `Date`s; the
/// time of day carried by feed timestamps is dropped on parse.
///
/// # Examples
///
/// ```
/// use rates_core::types::time::Date;
///
/// let quote_date = Date::from_ymd(2019, 7, 31).unwrap();
/// let maturity: Date = "2020-01-30".parse().unwrap();
///
/// // 26-week bill: 183 days to maturity
/// assert_eq!(maturity - quote_date, 183);
/// assert_eq!(quote_date.add_days(183), maturity);
/// assert_eq!(maturity.to_string(), "2020-01-30");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Date from calendar components.
    ///
    /// # Errors
    ///
    /// `DateError::OutOfRange` when the components name no real day.
    ///
    /// ```
    /// use rates_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2020, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2019, 2, 29).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(DateError::OutOfRange { year, month, day })
    }

    /// The current local calendar day.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Reads a `YYYY-MM-DD` date.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)
            .map(Self)
            .map_err(|e| unparseable(s, "YYYY-MM-DD", e))
    }

    /// Reads a feed timestamp (`YYYY-MM-DDThh:mm:ss`) and keeps its date part.
    ///
    /// ```
    /// use rates_core::types::time::Date;
    ///
    /// let date = Date::parse_feed_timestamp("2019-07-31T00:00:00").unwrap();
    /// assert_eq!(date, Date::from_ymd(2019, 7, 31).unwrap());
    ///
    /// assert!(Date::parse_feed_timestamp("2019-07-31").is_err());
    /// ```
    pub fn parse_feed_timestamp(s: &str) -> Result<Self, DateError> {
        NaiveDateTime::parse_from_str(s.trim(), FEED_TIMESTAMP_FORMAT)
            .map(|dt| Self(dt.date()))
            .map_err(|e| unparseable(s, "YYYY-MM-DDThh:mm:ss", e))
    }

    /// The date `days` calendar days away (negative moves backwards), or
    /// `None` past the end of the representable calendar.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        Duration::try_days(days)
            .and_then(|d| self.0.checked_add_signed(d))
            .map(Self)
    }

    /// The date `days` calendar days away (negative moves backwards).
    ///
    /// # Panics
    ///
    /// Past the end of the representable calendar (roughly ±262,000 years).
    /// Use [`checked_add_days`](Self::checked_add_days) for untrusted offsets.
    pub fn add_days(self, days: i64) -> Self {
        match self.checked_add_days(days) {
            Some(date) => date,
            None => panic!("date {} + {} days is out of range", self, days),
        }
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

fn unparseable(input: &str, expected: &'static str, err: chrono::ParseError) -> DateError {
    DateError::Unparseable {
        input: input.to_string(),
        expected,
        reason: err.to_string(),
    }
}

/// Signed number of calendar days from `rhs` to `self`.
impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> i64 {
        self.0.signed_duration_since(rhs.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.format(ISO_DATE_FORMAT), f)
    }
}
