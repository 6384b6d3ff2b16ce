use super::ui;
use crate::core::RateTable;
use anyhow::{Result, bail};
use comfy_table::Cell;
use std::io::Write;

/// Renders the rate table, optionally restricted to `filter` codes.
pub fn render(rates: &RateTable, filter: &[String]) -> Result<String> {
    let unknown: Vec<&str> = filter
        .iter()
        .filter(|code| rates.get(code).is_none())
        .map(String::as_str)
        .collect();
    if !unknown.is_empty() {
        bail!("Currency code not found: {}", unknown.join(", "));
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Currency"),
        ui::header_cell(&format!("Units per 1 {}", rates.base())),
    ]);

    for (code, rate) in rates.sorted() {
        if !filter.is_empty() && !filter.iter().any(|f| f == code) {
            continue;
        }
        table.add_row(vec![
            Cell::new(code),
            ui::rate_cell(rate, code == rates.base()),
        ]);
    }

    let updated = rates
        .last_updated()
        .map_or("unknown".to_string(), |t| t.format("%Y-%m-%d %H:%M UTC").to_string());

    let mut output = format!(
        "Base currency: {}\n",
        ui::style_text(rates.base(), ui::StyleType::Title)
    );
    output.push_str(&format!(
        "{} {}\n\n",
        ui::style_text("Last updated:", ui::StyleType::Label),
        ui::style_text(&updated, ui::StyleType::Subtle)
    ));
    output.push_str(&table.to_string());
    Ok(output)
}

pub fn run<W: Write>(out: &mut W, rates: &RateTable, filter: &[String]) -> Result<()> {
    let rendered = render(rates, filter)?;
    writeln!(out, "{rendered}")?;
    Ok(())
}
