//! Account service - the account directory

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::Account;
use crate::ports::AccountRepository;

/// Account directory service
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// The full catalog, unchanged
    pub async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.repository.list_accounts().await
    }

    /// Point lookup by id
    pub async fn get_account(&self, id: &str) -> Result<Option<Account>> {
        self.repository.get_account(id).await
    }
}
