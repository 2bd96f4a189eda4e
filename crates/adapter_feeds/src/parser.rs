//! Feed document parsing.
//!
//! The feed is an Atom document whose `<entry>` elements each carry an
//! OData `<m:properties>` block of `<d:FIELD>` values. Namespace prefixes are
//! ignored: fields are keyed by local name.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;
use rates_core::market_data::{MaturityPoint, QuoteRecord, Tenor};
use rates_core::types::Date;

use crate::error::FeedError;

/// Property holding an entry's quote timestamp.
pub const INDEX_DATE_FIELD: &str = "INDEX_DATE";

const ENTRY_ELEMENT: &[u8] = b"entry";

/// Leaf text values of one `<entry>`, keyed by element local name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    position: usize,
    fields: HashMap<String, String>,
}

impl FeedEntry {
    /// Create an entry from already-extracted fields.
    pub fn new(position: usize, fields: HashMap<String, String>) -> Self {
        Self { position, fields }
    }

    /// Zero-based position of the entry in the document.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Text of `name`, if present and non-empty.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// The raw `INDEX_DATE` timestamp.
    pub fn index_date(&self) -> Option<&str> {
        self.field(INDEX_DATE_FIELD)
    }

    fn label(&self) -> String {
        self.index_date()
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.position))
    }

    fn require(&self, name: &str) -> Result<&str, FeedError> {
        self.field(name).ok_or_else(|| FeedError::MissingField {
            entry: self.label(),
            field: name.to_string(),
        })
    }

    fn require_date(&self, name: &str) -> Result<Date, FeedError> {
        Date::parse_feed_timestamp(self.require(name)?).map_err(|source| FeedError::InvalidDate {
            field: name.to_string(),
            source,
        })
    }

    /// Extract the quote for every tenor in [`Tenor::ALL`].
    ///
    /// # Errors
    ///
    /// * `FeedError::MissingField` - `INDEX_DATE` or a tenor field is absent
    /// * `FeedError::InvalidDate` - a date field is not a feed timestamp
    /// * `FeedError::InvalidQuote` - bad decimal, or maturities out of order
    pub fn to_quote(&self) -> Result<QuoteRecord, FeedError> {
        let timestamp = self.require(INDEX_DATE_FIELD)?;
        let quote_date = self.require_date(INDEX_DATE_FIELD)?;

        let points = Tenor::ALL
            .iter()
            .map(|&tenor| {
                let discount = self.require(&tenor.discount_field())?;
                let maturity = self.require_date(&tenor.maturity_field())?;
                Ok(MaturityPoint::parse(tenor, maturity, discount)?)
            })
            .collect::<Result<Vec<_>, FeedError>>()?;

        Ok(QuoteRecord::new(quote_date, timestamp.trim(), points)?)
    }
}

/// Parse every `<entry>` of a feed document.
///
/// An empty list is not an error: a month with no published quotes yields
/// a valid feed without entries.
///
/// # Example
///
/// ```
/// use adapter_feeds::parse_entries;
///
/// let xml = br#"<feed xmlns="http://www.w3.org/2005/Atom"
///                     xmlns:m="urn:m" xmlns:d="urn:d">
///   <entry><content><m:properties>
///     <d:INDEX_DATE>2019-07-31T00:00:00</d:INDEX_DATE>
///   </m:properties></content></entry>
/// </feed>"#;
///
/// let entries = parse_entries(xml).unwrap();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].index_date(), Some("2019-07-31T00:00:00"));
/// ```
pub fn parse_entries(xml: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut entries = Vec::new();
    let mut current: Option<HashMap<String, String>> = None;
    let mut field: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                let name = e.local_name();
                if name.as_ref() == ENTRY_ELEMENT {
                    current = Some(HashMap::new());
                    field = None;
                } else if current.is_some() {
                    field = Some(String::from_utf8_lossy(name.as_ref()).into_owned());
                }
            }
            Ok(Event::Text(text)) => {
                if let (Some(fields), Some(name)) = (current.as_mut(), field.as_ref()) {
                    let value = text.unescape().map_err(|e| {
                        FeedError::Xml(format!(
                            "bad text at byte {}: {}",
                            reader.buffer_position(),
                            e
                        ))
                    })?;
                    fields.insert(name.clone(), value.into_owned());
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == ENTRY_ELEMENT {
                    if let Some(fields) = current.take() {
                        entries.push(FeedEntry::new(entries.len(), fields));
                    }
                }
                field = None;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedError::Xml(format!(
                    "at byte {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            Ok(_) => {}
        }
        buf.clear();
    }

    if current.is_some() {
        return Err(FeedError::Xml("unterminated <entry>".to_string()));
    }

    Ok(entries)
}

/// The entry with the greatest `INDEX_DATE`.
///
/// Timestamps are compared as strings, which orders fixed-width zero-padded
/// `YYYY-MM-DDThh:mm:ss` values chronologically. The first of several equal
/// maxima wins. Returns `Ok(None)` for an empty slice.
///
/// # Errors
///
/// `FeedError::MissingField` if any entry lacks `INDEX_DATE`.
pub fn latest_entry(entries: &[FeedEntry]) -> Result<Option<&FeedEntry>, FeedError> {
    let mut latest: Option<(&FeedEntry, &str)> = None;

    for entry in entries {
        let index_date = entry.require(INDEX_DATE_FIELD)?;
        if latest.map_or(true, |(_, best)| best < index_date) {
            latest = Some((entry, index_date));
        }
    }

    Ok(latest.map(|(entry, _)| entry))
}
