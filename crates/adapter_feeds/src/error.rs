//! Feed adapter error types.

use rates_core::market_data::QuoteError;
use rates_core::types::DateError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from retrieving or interpreting the rate feed.
///
/// Variants fall into two families that callers can tell apart with
/// [`is_transport`](FeedError::is_transport) and
/// [`is_malformed`](FeedError::is_malformed): failures to obtain the bytes,
/// and bytes that do not describe a usable quote.
#[derive(Error, Debug)]
pub enum FeedError {
    /// Network failure while requesting the feed.
    #[error("Transport error fetching {url}: {message}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        message: String,
    },

    /// Server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// Requested URL
        url: String,
        /// Response status code
        status: u16,
    },

    /// Local feed file could not be read.
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Feed bytes are not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(String),

    /// An entry lacks a required property.
    #[error("Entry {entry} is missing field {field}")]
    MissingField {
        /// `INDEX_DATE` of the entry, or its position if that is what is missing
        entry: String,
        /// Missing property name
        field: String,
    },

    /// A date property is not a `YYYY-MM-DDThh:mm:ss` timestamp.
    #[error("Invalid date in field {field}: {source}")]
    InvalidDate {
        /// Property name
        field: String,
        /// Parse failure
        #[source]
        source: DateError,
    },

    /// Extracted values do not form a valid quote.
    #[error("Invalid quote: {0}")]
    InvalidQuote(#[from] QuoteError),

    /// No entries were found in any month tried.
    #[error("Feed contains no entries (tried {months_tried} month(s))")]
    NoEntries {
        /// Number of monthly feeds requested
        months_tried: u32,
    },
}

impl FeedError {
    /// True for failures to obtain the feed bytes.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            FeedError::Transport { .. } | FeedError::HttpStatus { .. } | FeedError::Io { .. }
        )
    }

    /// True when the bytes were obtained but do not describe a usable quote.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            FeedError::Xml(_)
                | FeedError::MissingField { .. }
                | FeedError::InvalidDate { .. }
                | FeedError::InvalidQuote(_)
        )
    }
}
