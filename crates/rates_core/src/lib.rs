//! # rates_core: Treasury Bill Discount-Rate Kernel
//!
//! ## Layer Role
//!
//! rates_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` with feed timestamp parsing (`types::time`)
//! - Error types: `DateError`, `InterpolationError` (`types::error`)
//! - The fixed bill tenor set and quote records (`market_data`)
//! - Flat-clamped linear interpolation (`math::interpolators`)
//! - Discount-rate curves and bill pricing (`market_data::discount`)
//!
//! ## Purity
//!
//! Nothing in this crate performs I/O or logs. Every operation is a pure
//! function of its inputs, so curves built from the same quote snapshot can
//! be shared freely across threads.
//!
//! ## Usage Examples
//!
//! ```rust
//! use rates_core::market_data::{interpolate, MaturityPoint, QuoteRecord, Tenor};
//! use rates_core::types::Date;
//! use rust_decimal::Decimal;
//!
//! let today = Date::from_ymd(2024, 1, 1).unwrap();
//! let rates = ["1.50", "1.60", "1.75", "2.00", "2.30"];
//! let offsets = [28, 56, 91, 182, 364];
//!
//! let points: Vec<MaturityPoint> = Tenor::ALL
//!     .iter()
//!     .zip(rates.iter().zip(offsets.iter()))
//!     .map(|(&tenor, (rate, &days))| {
//!         MaturityPoint::new(tenor, today.add_days(days), rate.parse::<Decimal>().unwrap())
//!     })
//!     .collect();
//!
//! let quote = QuoteRecord::new(today, "2024-01-01T00:00:00", points).unwrap();
//!
//! // 56 days out lands exactly on the 8-week maturity
//! let rate = interpolate(today, quote.points(), today.add_days(56));
//! assert_eq!(rate, 1.60);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, Tenor, MaturityPoint and QuoteRecord

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
