//! Account domain model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A financial account in the demo catalog
///
/// The catalog is read-only to the core: balances are never mutated, not even
/// by a successful (simulated) transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    /// Masked account number, e.g. "**** 4589"
    pub number: String,
    pub balance: Decimal,
    pub currency: Currency,
    pub kind: AccountKind,
    pub last_updated: DateTime<Utc>,
}

/// ISO 4217 currency codes the demo catalog uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Currency {
    #[serde(rename = "USD")]
    Usd,
    #[serde(rename = "EUR")]
    Eur,
    #[serde(rename = "COP")]
    Cop,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Cop => "COP",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Cop => "COL$",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Account type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
}

impl AccountKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
            AccountKind::Credit => "credit",
        }
    }
}

impl std::fmt::Display for AccountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Account {
    /// Validate account data
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("account name cannot be empty");
        }
        if self.number.trim().is_empty() {
            return Err("account number cannot be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Account {
        Account {
            id: "acc_1".to_string(),
            name: "Main Savings".to_string(),
            number: "**** 4589".to_string(),
            balance: Decimal::new(2450050, 2),
            currency: Currency::Usd,
            kind: AccountKind::Savings,
            last_updated: Utc::now(),
        }
    }

    #[test]
    fn test_account_validation() {
        let mut account = sample();
        assert!(account.validate().is_ok());

        account.name = "  ".to_string();
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(&Currency::Eur).unwrap();
        assert_eq!(json, "\"EUR\"");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AccountKind::Checking).unwrap();
        assert_eq!(json, "\"checking\"");
    }
}
