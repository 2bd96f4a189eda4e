//! Feed query URLs.

/// OData endpoint of the daily Treasury bill rate dataset.
pub const DEFAULT_FEED_BASE_URL: &str =
    "https://data.treasury.gov/feed.svc/DailyTreasuryBillRateData";

/// Builds month-filtered queries against the feed endpoint.
///
/// # Example
///
/// ```
/// use adapter_feeds::FeedUrl;
///
/// let url = FeedUrl::new("http://data.treasury.gov/feed.svc/DailyTreasuryBillRateData");
/// assert_eq!(
///     url.for_month(2019, 7),
///     "http://data.treasury.gov/feed.svc/DailyTreasuryBillRateData\
///      ?$filter=month(INDEX_DATE)%20eq%207%20and%20year(INDEX_DATE)%20eq%202019"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedUrl {
    base: String,
}

impl FeedUrl {
    /// Create a builder for `base`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The endpoint without any filter.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Query URL restricted to entries whose `INDEX_DATE` falls in `month` of `year`.
    pub fn for_month(&self, year: i32, month: u32) -> String {
        let separator = if self.base.contains('?') { '&' } else { '?' };
        format!(
            "{}{}$filter=month(INDEX_DATE)%20eq%20{}%20and%20year(INDEX_DATE)%20eq%20{}",
            self.base, separator, month, year
        )
    }
}

impl Default for FeedUrl {
    fn default() -> Self {
        Self::new(DEFAULT_FEED_BASE_URL)
    }
}

/// The calendar month before `month` of `year`.
///
/// # Example
///
/// ```
/// use adapter_feeds::previous_month;
///
/// assert_eq!(previous_month(2019, 7), (2019, 6));
/// assert_eq!(previous_month(2020, 1), (2019, 12));
/// ```
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}
