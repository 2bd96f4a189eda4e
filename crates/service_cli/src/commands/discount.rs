//! Discount command implementation

use std::io::Write;

use rates_core::market_data::DiscountCurve;
use rates_core::types::Date;
use tracing::info;

use crate::Result;

/// Run the discount command: one interpolated rate for `target`.
pub fn run<W: Write>(out: &mut W, curve: &DiscountCurve, target: Date, precision: usize) -> Result<()> {
    info!(
        "Interpolating discount for {} ({} days from {})",
        target,
        target - curve.reference_date(),
        curve.reference_date()
    );

    let rate = curve.discount_rate(target);
    writeln!(
        out,
        "Discount for maturity {}: {:.prec$}",
        target,
        rate,
        prec = precision
    )?;
    Ok(())
}
