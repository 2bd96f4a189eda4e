//! Bill tenors quoted by the daily rate feed.

use std::fmt;
use std::str::FromStr;

use super::error::QuoteError;

/// Number of tenors in every quote.
pub const TENOR_COUNT: usize = 5;

/// Nominal duration of a Treasury bill, in weeks.
///
/// The variants are declared in ascending order, so the derived `Ord`
/// matches maturity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tenor {
    /// 4-week bill
    #[cfg_attr(feature = "serde", serde(rename = "4WK"))]
    Week4,
    /// 8-week bill
    #[cfg_attr(feature = "serde", serde(rename = "8WK"))]
    Week8,
    /// 13-week bill
    #[cfg_attr(feature = "serde", serde(rename = "13WK"))]
    Week13,
    /// 26-week bill
    #[cfg_attr(feature = "serde", serde(rename = "26WK"))]
    Week26,
    /// 52-week bill
    #[cfg_attr(feature = "serde", serde(rename = "52WK"))]
    Week52,
}

impl Tenor {
    /// Every tenor, shortest first. Parser and interpolator both iterate this.
    pub const ALL: [Tenor; TENOR_COUNT] = [
        Tenor::Week4,
        Tenor::Week8,
        Tenor::Week13,
        Tenor::Week26,
        Tenor::Week52,
    ];

    /// Returns the tenor length in weeks.
    ///
    /// # Examples
    ///
    /// ```
    /// use rates_core::market_data::Tenor;
    ///
    /// let weeks: Vec<u32> = Tenor::ALL.iter().map(|t| t.weeks()).collect();
    /// assert_eq!(weeks, vec![4, 8, 13, 26, 52]);
    /// ```
    pub const fn weeks(&self) -> u32 {
        match self {
            Tenor::Week4 => 4,
            Tenor::Week8 => 8,
            Tenor::Week13 => 13,
            Tenor::Week26 => 26,
            Tenor::Week52 => 52,
        }
    }

    /// Looks up a tenor by its length in weeks.
    pub fn from_weeks(weeks: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.weeks() == weeks)
    }

    /// Feed field holding the close-average discount rate, e.g. `CS_13WK_CLOSE_AVG`.
    pub fn discount_field(&self) -> String {
        format!("CS_{}WK_CLOSE_AVG", self.weeks())
    }

    /// Feed field holding the maturity date, e.g. `MATURITY_DATE_13WK`.
    pub fn maturity_field(&self) -> String {
        format!("MATURITY_DATE_{}WK", self.weeks())
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}WK", self.weeks())
    }
}

impl FromStr for Tenor {
    type Err = QuoteError;

    /// Accepts `13`, `13WK` or `13wk`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_suffix("WK")
            .or_else(|| trimmed.strip_suffix("wk"))
            .unwrap_or(trimmed);

        digits
            .parse::<u32>()
            .ok()
            .and_then(Tenor::from_weeks)
            .ok_or_else(|| QuoteError::UnknownTenor(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_ascending() {
        assert!(Tenor::ALL.windows(2).all(|w| w[0] < w[1]));
        assert!(Tenor::ALL.windows(2).all(|w| w[0].weeks() < w[1].weeks()));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Tenor::Week4.discount_field(), "CS_4WK_CLOSE_AVG");
        assert_eq!(Tenor::Week52.maturity_field(), "MATURITY_DATE_52WK");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("26".parse::<Tenor>().unwrap(), Tenor::Week26);
        assert_eq!("8WK".parse::<Tenor>().unwrap(), Tenor::Week8);
        assert_eq!("52wk".parse::<Tenor>().unwrap(), Tenor::Week52);
        assert!(matches!(
            "10".parse::<Tenor>(),
            Err(QuoteError::UnknownTenor(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Tenor::Week13.to_string(), "13WK");
    }

    #[test]
    fn test_from_weeks_unknown() {
        assert_eq!(Tenor::from_weeks(17), None);
    }
}
