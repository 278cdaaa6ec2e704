//! Transactions command - the paginated transaction table

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use ledgerline_core::{Currency, TransactionQuery, TransactionSort};

use super::{get_context, require_session, spinner};
use crate::output;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    page: usize,
    page_size: usize,
    search: Option<String>,
    status: &str,
    from: Option<String>,
    to: Option<String>,
    sort: &str,
    dir: &str,
    json: bool,
) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    let mut query = TransactionQuery::new(page, page_size);
    query.filters.search = search;
    query.filters.status = status.parse().map_err(|e: String| anyhow!(e))?;
    query.filters.date_from = from.as_deref().map(|d| parse_day_start(d)).transpose()?;
    query.filters.date_to = to.as_deref().map(|d| parse_day_end(d)).transpose()?;
    query.sort = TransactionSort {
        field: sort.parse().map_err(|e: String| anyhow!(e))?,
        direction: dir.parse().map_err(|e: String| anyhow!(e))?,
    };

    let pb = spinner("Fetching transactions...");
    let result = ctx.transaction_service.get_transactions(&query).await;
    pb.finish_and_clear();
    let result = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Date", "Concept", "Merchant", "Amount", "Status"]);
    for tx in &result.data {
        table.add_row(vec![
            output::format_date(tx.date),
            tx.concept.clone(),
            tx.merchant.clone(),
            output::format_money(tx.amount, Currency::Usd),
            output::format_status(tx.status),
        ]);
    }
    println!("{}", table);

    // The engine reports 0 pages for an empty result; show a 1-page floor
    let total_pages = result.total_pages.max(1);
    output::info(&format!(
        "page {} of {} ({} transactions)",
        result.page, total_pages, result.total
    ));
    Ok(())
}

fn parse_day_start(day: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    let date = parse_day(day)?;
    Ok(date.and_hms_opt(0, 0, 0).expect("midnight exists").and_utc())
}

fn parse_day_end(day: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    let date = parse_day(day)?;
    Ok(date
        .and_hms_opt(23, 59, 59)
        .expect("end of day exists")
        .and_utc())
}

fn parse_day(day: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|_| anyhow!("invalid date {:?}, expected YYYY-MM-DD", day))
}
