//! Treasury bill market data.
//!
//! This module provides:
//! - [`Tenor`]: The fixed set of bill tenors quoted by the feed
//! - [`MaturityPoint`] and [`QuoteRecord`]: An immutable snapshot of one quote date
//! - [`interpolate`] and [`DiscountCurve`]: Discount rates for arbitrary dates
//! - [`bill_price`]: Current value of a bill under bank-discount pricing
//! - [`QuoteError`]: Quote construction failures

mod bill;
mod discount;
mod error;
mod quote;
mod tenor;

pub use bill::{bill_price, BillValuation, BANK_DISCOUNT_BASIS};
pub use discount::{interpolate, DiscountCurve};
pub use error::QuoteError;
pub use quote::{MaturityPoint, QuoteRecord};
pub use tenor::{Tenor, TENOR_COUNT};
