//! Renders conversion results as the two-line text report.

use std::io::{self, Write};

/// Rounds to the nearest integer, half away from zero, with no separators.
/// Values that round to zero print as `0`, never `-0`.
pub fn format_integer(value: f64) -> String {
    let rounded = value.round();
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded:.0}")
}

/// Same rounding as [`format_integer`], with digits grouped in threes by `,`.
pub fn format_thousands(value: f64) -> String {
    let plain = format_integer(value);
    let (sign, digits) = match plain.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", plain.as_str()),
    };

    let mut grouped = String::with_capacity(plain.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn write_conversion<W: Write>(
    w: &mut W,
    amount: f64,
    from: &str,
    to: &str,
    result: f64,
) -> io::Result<()> {
    writeln!(w, "From: {} {from} to {to}", format_integer(amount))?;
    writeln!(w, "Result:  {} {to}", format_thousands(result))
}

pub fn format_conversion(amount: f64, from: &str, to: &str, result: f64) -> String {
    let mut out = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_conversion(&mut out, amount, from, to, result);
    String::from_utf8_lossy(&out).into_owned()
}
