//! Schedule command implementation
//!
//! Prints the resolved quote followed by one interpolated discount per
//! calendar day, starting at the reference date.

use std::io::Write;

use rates_core::market_data::DiscountCurve;
use tracing::info;

use super::quote;
use crate::config::{MAX_PRECISION, MAX_SCHEDULE_DAYS};
use crate::{CliError, Result};

/// Reject `--days` and `--precision` values the configuration would refuse.
pub fn check_bounds(days: u32, precision: usize) -> Result<()> {
    if days == 0 || days > MAX_SCHEDULE_DAYS {
        return Err(CliError::InvalidArgument(format!(
            "--days must be between 1 and {}, got {}",
            MAX_SCHEDULE_DAYS, days
        )));
    }
    if precision > MAX_PRECISION {
        return Err(CliError::InvalidArgument(format!(
            "--precision must be at most {}, got {}",
            MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Run the schedule command
pub fn run<W: Write>(out: &mut W, curve: &DiscountCurve, days: u32, precision: usize) -> Result<()> {
    info!(
        "Building {}-day schedule from {}",
        days,
        curve.reference_date()
    );

    quote::write_table(out, curve.quote())?;

    let schedule = curve.schedule(days);
    for (date, rate) in &schedule {
        writeln!(
            out,
            "Discount for maturity {}: {:.prec$}",
            date,
            rate,
            prec = precision
        )?;
    }

    info!("Wrote {} schedule lines", schedule.len());
    Ok(())
}
