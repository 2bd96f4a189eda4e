//! Price command implementation
//!
//! Values a bill off the curve using the bank-discount convention.

use std::io::Write;

use rates_core::market_data::DiscountCurve;
use rates_core::types::Date;
use tracing::info;

use crate::{CliError, Result};

/// Fractional digits for monetary amounts.
const VALUE_DECIMALS: usize = 6;

/// Run the price command
pub fn run<W: Write>(
    out: &mut W,
    curve: &DiscountCurve,
    face_value: f64,
    maturity: Date,
    precision: usize,
) -> Result<()> {
    if !face_value.is_finite() || face_value <= 0.0 {
        return Err(CliError::InvalidArgument(format!(
            "Face value must be a positive amount, got {}",
            face_value
        )));
    }
    if maturity < curve.reference_date() {
        return Err(CliError::InvalidArgument(format!(
            "Maturity {} is before the reference date {}",
            maturity,
            curve.reference_date()
        )));
    }

    info!("Pricing bill: face {} maturing {}", face_value, maturity);
    let valuation = curve.value_bill(face_value, maturity);

    writeln!(out, "Bill valuation as of {}", curve.reference_date())?;
    writeln!(
        out,
        "  Maturity:       {} ({} days)",
        valuation.maturity_date, valuation.days_to_maturity
    )?;
    writeln!(
        out,
        "  Discount rate:  {:.prec$}",
        valuation.discount_rate,
        prec = precision
    )?;
    writeln!(
        out,
        "  Face value:     {:.prec$}",
        valuation.face_value,
        prec = VALUE_DECIMALS
    )?;
    writeln!(
        out,
        "  Current value:  {:.prec$}",
        valuation.price,
        prec = VALUE_DECIMALS
    )?;

    info!("Pricing complete");
    Ok(())
}
