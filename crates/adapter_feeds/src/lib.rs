//! # adapter_feeds: Treasury Bill Rate Feed Adapter
//!
//! Turns the Treasury's daily bill rate Atom/OData feed into a validated
//! [`QuoteRecord`](rates_core::market_data::QuoteRecord).
//!
//! ## Pipeline
//!
//! 1. [`FeedUrl`] builds the month-filtered query URL
//! 2. A [`FeedSource`] retrieves the raw bytes ([`HttpFeedSource`] or [`FileFeedSource`])
//! 3. [`parse_entries`] reads every `<entry>`'s property fields
//! 4. [`latest_entry`] picks the newest `INDEX_DATE` and
//!    [`FeedEntry::to_quote`] extracts the five tenors
//!
//! [`FeedReader`] runs the whole pipeline, falling back to earlier months
//! when a month has no entries yet.
//!
//! ## Example
//!
//! ```rust,no_run
//! use adapter_feeds::{FeedReader, FeedUrl, HttpFeedSource};
//!
//! let source = HttpFeedSource::new(None)?;
//! let reader = FeedReader::new(source, FeedUrl::default());
//! let quote = reader.fetch_latest_quote()?;
//! println!("quote date: {}", quote.quote_date());
//! # Ok::<(), adapter_feeds::FeedError>(())
//! ```

mod error;
mod parser;
mod reader;
mod source;
mod url;

pub use error::FeedError;
pub use parser::{latest_entry, parse_entries, FeedEntry, INDEX_DATE_FIELD};
pub use reader::FeedReader;
pub use source::{FeedSource, FileFeedSource, HttpFeedSource};
pub use url::{previous_month, FeedUrl, DEFAULT_FEED_BASE_URL};
