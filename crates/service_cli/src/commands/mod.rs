//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write their
//! results to the supplied writer; progress goes to the log.

pub mod discount;
pub mod price;
pub mod quote;
pub mod schedule;

use std::path::Path;

use adapter_feeds::{FeedReader, FeedSource, FeedUrl, FileFeedSource, HttpFeedSource};
use rates_core::market_data::DiscountCurve;
use rates_core::types::Date;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::Result;

/// Fetch the latest quote and anchor it at `as_of`.
///
/// Reads `feed_file` when given, otherwise queries the HTTP feed named in
/// the configuration.
pub fn load_curve(config: &CliConfig, feed_file: Option<&Path>, as_of: Date) -> Result<DiscountCurve> {
    let source: Box<dyn FeedSource> = match feed_file {
        Some(path) => {
            info!("Reading feed from {}", path.display());
            Box::new(FileFeedSource::new(path))
        }
        None => {
            info!("Querying feed at {}", config.feed_url);
            Box::new(HttpFeedSource::new(config.timeout())?)
        }
    };

    let reader = FeedReader::new(source, FeedUrl::new(config.feed_url.as_str()))
        .with_fallback_months(config.fallback_months);
    let quote = reader.fetch_latest_quote_as_of(as_of)?;
    let curve = DiscountCurve::new(quote, as_of);

    if curve.is_stale() {
        warn!(
            quote_date = %curve.quote().quote_date(),
            first_maturity = %curve.quote().first_maturity(),
            reference_date = %as_of,
            "Reference date is past the shortest maturity; quote is stale"
        );
    }

    Ok(curve)
}
