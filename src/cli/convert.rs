use crate::core::{ConversionRequest, RateTable, convert, write_conversion};
use anyhow::{Context, Result, bail};
use std::io::Write;
use tracing::{debug, info};

/// Parses the amount argument. Any real number is accepted, including zero
/// and negatives; `nan` and `inf` are not.
pub fn parse_amount(value: &str) -> Result<f64> {
    let amount: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid amount: {value}"))?;
    if !amount.is_finite() {
        bail!("Amount must be a finite number, got {value}");
    }
    Ok(amount)
}

/// Converts the requested amount and writes the two-line report to `out`.
pub fn run<W: Write>(out: &mut W, rates: &RateTable, request: &ConversionRequest) -> Result<()> {
    info!(
        amount = request.amount,
        from = %request.from,
        to = %request.to,
        "Converting"
    );

    let result = convert(rates, &request.from, &request.to, request.amount)?;
    debug!(result, "Conversion complete");

    write_conversion(out, request.amount, &request.from, &request.to, result)
        .context("Failed to write conversion result")?;
    Ok(())
}
