//! Accounts command - the account directory

use anyhow::Result;

use super::{get_context, require_session, spinner};
use crate::output;

pub async fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    let pb = spinner("Fetching accounts...");
    let accounts = ctx.account_service.list_accounts().await;
    pb.finish_and_clear();
    let accounts = accounts?;

    if json {
        println!("{}", serde_json::to_string_pretty(&accounts)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Id", "Name", "Number", "Type", "Balance", "Updated"]);
    for account in &accounts {
        table.add_row(vec![
            account.id.clone(),
            account.name.clone(),
            account.number.clone(),
            account.kind.to_string(),
            output::format_money(account.balance, account.currency),
            output::format_date(account.last_updated),
        ]);
    }
    println!("{}", table);
    Ok(())
}
