//! Core value types.
//!
//! - `time`: [`Date`], calendar days with signed day-count arithmetic and
//!   parsing of the feed's timestamp layout
//! - `error`: [`DateError`] and [`InterpolationError`]

pub mod error;
pub mod time;

pub use error::{DateError, InterpolationError};
pub use time::{Date, FEED_TIMESTAMP_FORMAT, ISO_DATE_FORMAT};
