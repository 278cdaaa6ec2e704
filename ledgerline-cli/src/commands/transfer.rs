//! Transfer command - the simulated transfer sheet

use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use rust_decimal::Decimal;

use super::{get_context, require_session, spinner};
use crate::output;

pub async fn run(from: &str, to: &str, amount: &str, yes: bool) -> Result<()> {
    let ctx = get_context()?;
    require_session(&ctx)?;

    let amount: Decimal = amount
        .parse()
        .map_err(|_| anyhow!("invalid amount {:?}", amount))?;

    let source = ctx
        .account_service
        .get_account(from)
        .await?
        .ok_or_else(|| anyhow!("unknown source account: {}", from))?;

    if !yes {
        let prompt = format!(
            "Transfer {} from {} ({}) to {}?",
            output::format_money(amount, source.currency),
            source.name,
            source.number,
            to
        );
        if !Confirm::new().with_prompt(prompt).interact()? {
            output::info("Transfer cancelled");
            return Ok(());
        }
    }

    let pb = spinner("Submitting transfer...");
    let result = ctx.transfer_service.transfer(from, to, amount).await;
    pb.finish_and_clear();

    let receipt = result?;
    output::success(&format!(
        "Transfer of {} submitted (reference {})",
        output::format_money(receipt.amount, source.currency),
        receipt.reference
    ));
    output::info("Demo only: no balance was moved");
    Ok(())
}
