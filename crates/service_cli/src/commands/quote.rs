//! Quote command implementation
//!
//! Prints the resolved quote: each tenor's maturity date and discount.

use std::io::Write;
use std::str::FromStr;

use rates_core::market_data::QuoteRecord;
use tracing::info;

use crate::{CliError, Result};

/// Output format for the quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Box-drawn table
    Table,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Run the quote command
pub fn run<W: Write>(out: &mut W, quote: &QuoteRecord, format: OutputFormat) -> Result<()> {
    info!("Printing quote for {} as {:?}", quote.quote_date(), format);

    match format {
        OutputFormat::Table => write_table(out, quote)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, quote)?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Write the quote as a table.
pub fn write_table<W: Write>(out: &mut W, quote: &QuoteRecord) -> Result<()> {
    writeln!(
        out,
        "Quote date: {} ({})",
        quote.quote_date(),
        quote.quote_timestamp()
    )?;
    writeln!(out, "┌───────┬────────────┬──────────┐")?;
    writeln!(out, "│ Tenor │ Maturity   │ Discount │")?;
    writeln!(out, "├───────┼────────────┼──────────┤")?;
    for point in quote.points() {
        writeln!(
            out,
            "│ {:<5} │ {} │ {:>8} │",
            point.tenor().to_string(),
            point.maturity_date(),
            point.discount().to_string()
        )?;
    }
    writeln!(out, "└───────┴────────────┴──────────┘")?;
    Ok(())
}
