//! Repository ports - data source abstraction
//!
//! The query engine and services depend on these traits, never on a concrete
//! data source. The demo adapter serves canned data; a real implementation
//! would swap in an HTTP or database adapter without touching the engine.

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Account, Transaction};

/// Read-only access to the account catalog
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// All accounts, unchanged and unfiltered
    async fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Point lookup by account id
    async fn get_account(&self, id: &str) -> Result<Option<Account>>;
}

/// Read-only access to the transaction dataset
#[async_trait]
pub trait TransactionRepository: Send + Sync {
    /// The full dataset the query engine paginates over
    async fn all_transactions(&self) -> Result<Vec<Transaction>>;
}
