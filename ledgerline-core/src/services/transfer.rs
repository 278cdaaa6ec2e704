//! Transfer service - simulated money movement
//!
//! Every rule is checked client-side before the simulated submit, and a
//! successful transfer never mutates any balance: the receipt is the only
//! artifact.

use std::sync::Arc;
use std::time::Duration as StdDuration;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::Account;
use crate::ports::AccountRepository;

/// Simulated submit latency
const SUBMIT_DELAY_MS: u64 = 300;

/// Confirmation of a simulated transfer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferReceipt {
    pub reference: Uuid,
    pub from_account: String,
    pub to_account: String,
    pub amount: Decimal,
    pub submitted_at: DateTime<Utc>,
}

/// Transfer flow over the account directory
pub struct TransferService {
    accounts: Arc<dyn AccountRepository>,
    simulate_latency: bool,
}

impl TransferService {
    pub fn new(accounts: Arc<dyn AccountRepository>, simulate_latency: bool) -> Self {
        Self {
            accounts,
            simulate_latency,
        }
    }

    /// Validate and submit a transfer
    ///
    /// Validation failures come back as [`Error::Validation`] before any
    /// simulated backend work happens.
    pub async fn transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt> {
        let from = self
            .accounts
            .get_account(from_id)
            .await?
            .ok_or_else(|| Error::validation(format!("unknown source account: {}", from_id)))?;
        let to = self
            .accounts
            .get_account(to_id)
            .await?
            .ok_or_else(|| Error::validation(format!("unknown destination account: {}", to_id)))?;

        Self::validate(&from, &to, amount)?;

        // Simulated submit; a real backend call would go here
        if self.simulate_latency {
            tokio::time::sleep(StdDuration::from_millis(SUBMIT_DELAY_MS)).await;
        }

        let receipt = TransferReceipt {
            reference: Uuid::new_v4(),
            from_account: from.id,
            to_account: to.id,
            amount,
            submitted_at: Utc::now(),
        };
        tracing::info!(reference = %receipt.reference, amount = %amount, "transfer simulated");
        Ok(receipt)
    }

    /// The client-side rule set from the transfer sheet
    fn validate(from: &Account, to: &Account, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::validation("amount must be greater than zero"));
        }
        if from.id == to.id {
            return Err(Error::validation(
                "destination must differ from source account",
            ));
        }
        if amount > from.balance {
            return Err(Error::validation("insufficient balance"));
        }
        Ok(())
    }
}
