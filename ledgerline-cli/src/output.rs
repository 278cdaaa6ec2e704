//! Output formatting utilities

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use ledgerline_core::{Currency, TransactionStatus};
use rust_decimal::Decimal;

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{}", msg.cyan());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Format a signed amount with its currency symbol, e.g. "-$1,250.30"
pub fn format_money(amount: Decimal, currency: Currency) -> String {
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}{}{}", sign, currency.symbol(), group_thousands(amount.abs()))
}

/// Render a timestamp in the local timezone
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// Status cell with the usual traffic-light coloring
pub fn format_status(status: TransactionStatus) -> String {
    match status {
        TransactionStatus::Pending => status.as_str().yellow().to_string(),
        TransactionStatus::Confirmed => status.as_str().green().to_string(),
        TransactionStatus::Failed => status.as_str().red().to_string(),
    }
}

fn group_thousands(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, c) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, fraction)
}
