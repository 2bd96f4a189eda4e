//! Latest-quote retrieval with month fallback.

use rates_core::market_data::QuoteRecord;
use rates_core::types::Date;
use tracing::{debug, info, warn};

use crate::error::FeedError;
use crate::parser::{latest_entry, parse_entries};
use crate::source::FeedSource;
use crate::url::{previous_month, FeedUrl};

/// Fetches the most recent quote from a [`FeedSource`].
///
/// The feed is queried one calendar month at a time. Early in a month the
/// current month may have no entries yet, so the reader walks back up to
/// `fallback_months` earlier months before giving up.
#[derive(Debug, Clone)]
pub struct FeedReader<S: FeedSource> {
    source: S,
    url: FeedUrl,
    fallback_months: u32,
}

impl<S: FeedSource> FeedReader<S> {
    /// Create a reader with one month of fallback.
    pub fn new(source: S, url: FeedUrl) -> Self {
        Self {
            source,
            url,
            fallback_months: 1,
        }
    }

    /// Set how many earlier months to try when a month has no entries.
    pub fn with_fallback_months(mut self, months: u32) -> Self {
        self.fallback_months = months;
        self
    }

    /// Number of earlier months tried after an empty month.
    pub fn fallback_months(&self) -> u32 {
        self.fallback_months
    }

    /// Latest quote as of today.
    pub fn fetch_latest_quote(&self) -> Result<QuoteRecord, FeedError> {
        self.fetch_latest_quote_as_of(Date::today())
    }

    /// Latest quote published in the month of `as_of` (or an earlier month
    /// if that one is still empty).
    ///
    /// # Errors
    ///
    /// * Transport errors from the source are returned immediately
    /// * Malformed documents or entries are returned immediately
    /// * `FeedError::NoEntries` when every month tried is empty
    pub fn fetch_latest_quote_as_of(&self, as_of: Date) -> Result<QuoteRecord, FeedError> {
        let mut year_month = (as_of.year(), as_of.month());
        let months = self.fallback_months.saturating_add(1);

        for attempt in 0..months {
            let (year, month) = year_month;
            let url = self.url.for_month(year, month);
            info!(year, month, attempt, "fetching rate feed");

            let bytes = self.source.fetch(&url)?;
            let entries = parse_entries(&bytes)?;
            debug!(entries = entries.len(), "parsed feed entries");

            if let Some(entry) = latest_entry(&entries)? {
                let quote = entry.to_quote()?;
                info!(quote_date = %quote.quote_date(), "resolved latest quote");
                return Ok(quote);
            }

            warn!(year, month, "feed has no entries for month");
            year_month = previous_month(year, month);
        }

        Err(FeedError::NoEntries {
            months_tried: months,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Serves canned documents in order and records requested URLs.
    struct ScriptedSource {
        responses: RefCell<Vec<Result<Vec<u8>, FeedError>>>,
        requested: RefCell<Vec<String>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<u8>, FeedError>>) -> Self {
            Self {
                responses: RefCell::new(responses.into_iter().rev().collect()),
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl FeedSource for ScriptedSource {
        fn fetch(&self, url: &str) -> Result<Vec<u8>, FeedError> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .borrow_mut()
                .pop()
                .unwrap_or_else(|| Ok(b"<feed/>".to_vec()))
        }
    }

    const EMPTY_FEED: &[u8] = b"<feed xmlns=\"http://www.w3.org/2005/Atom\"></feed>";

    fn one_entry_feed() -> Vec<u8> {
        let mut props = String::from("<d:INDEX_DATE>2019-06-28T00:00:00</d:INDEX_DATE>");
        let maturities = [
            "2019-07-25T00:00:00",
            "2019-08-22T00:00:00",
            "2019-09-26T00:00:00",
            "2019-12-26T00:00:00",
            "2020-06-18T00:00:00",
        ];
        for (i, tenor) in rates_core::market_data::Tenor::ALL.iter().enumerate() {
            props.push_str(&format!(
                "<d:{0}>2.1{1}</d:{0}><d:{2}>{3}</d:{2}>",
                tenor.discount_field(),
                i,
                tenor.maturity_field(),
                maturities[i]
            ));
        }
        format!(
            "<feed xmlns:d=\"urn:d\" xmlns:m=\"urn:m\"><entry><content><m:properties>{}</m:properties></content></entry></feed>",
            props
        )
        .into_bytes()
    }

    fn as_of() -> Date {
        Date::from_ymd(2019, 7, 1).unwrap()
    }

    #[test]
    fn test_falls_back_to_previous_month() {
        let source = ScriptedSource::new(vec![Ok(EMPTY_FEED.to_vec()), Ok(one_entry_feed())]);
        let reader = FeedReader::new(&source, FeedUrl::new("http://feed"));

        let quote = reader.fetch_latest_quote_as_of(as_of()).unwrap();
        assert_eq!(quote.quote_date(), Date::from_ymd(2019, 6, 28).unwrap());

        let requested = source.requested.borrow();
        assert_eq!(requested.len(), 2);
        assert!(requested[0].contains("eq%207%20and%20year(INDEX_DATE)%20eq%202019"));
        assert!(requested[1].contains("eq%206%20and%20year(INDEX_DATE)%20eq%202019"));
    }

    #[test]
    fn test_no_entries_after_fallback() {
        let source = ScriptedSource::new(vec![
            Ok(EMPTY_FEED.to_vec()),
            Ok(EMPTY_FEED.to_vec()),
            Ok(EMPTY_FEED.to_vec()),
        ]);
        let reader = FeedReader::new(&source, FeedUrl::new("http://feed")).with_fallback_months(2);

        match reader.fetch_latest_quote_as_of(as_of()) {
            Err(FeedError::NoEntries { months_tried }) => assert_eq!(months_tried, 3),
            other => panic!("Expected NoEntries, got {:?}", other),
        }
        assert_eq!(source.requested.borrow().len(), 3);
    }

    #[test]
    fn test_zero_fallback_tries_once() {
        let source = ScriptedSource::new(vec![Ok(EMPTY_FEED.to_vec()), Ok(one_entry_feed())]);
        let reader = FeedReader::new(&source, FeedUrl::new("http://feed")).with_fallback_months(0);

        assert!(matches!(
            reader.fetch_latest_quote_as_of(as_of()),
            Err(FeedError::NoEntries { months_tried: 1 })
        ));
    }

    #[test]
    fn test_transport_error_is_not_retried() {
        let source = ScriptedSource::new(vec![Err(FeedError::HttpStatus {
            url: "http://feed".to_string(),
            status: 500,
        })]);
        let reader = FeedReader::new(&source, FeedUrl::new("http://feed"));

        let err = reader.fetch_latest_quote_as_of(as_of()).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(source.requested.borrow().len(), 1);
    }

    #[test]
    fn test_malformed_feed_surfaces() {
        let source = ScriptedSource::new(vec![Ok(b"<feed><entry></feed>".to_vec())]);
        let reader = FeedReader::new(&source, FeedUrl::new("http://feed"));

        let err = reader.fetch_latest_quote_as_of(as_of()).unwrap_err();
        assert!(err.is_malformed());
    }
}
