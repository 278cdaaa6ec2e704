//! Transaction service - query orchestration
//!
//! Fetches the dataset through the repository port and hands it to the pure
//! query engine. Transient repository failures get a small bounded retry
//! before surfacing, mirroring the data-fetching layer the original UI sat
//! behind.

use std::sync::Arc;

use crate::domain::result::Result;
use crate::domain::{Paginated, Transaction, TransactionQuery};
use crate::ports::TransactionRepository;

/// Fetch attempts per query (1 initial + retries)
const MAX_ATTEMPTS: usize = 3;

/// Transaction query service
pub struct TransactionService {
    repository: Arc<dyn TransactionRepository>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepository>) -> Self {
        Self { repository }
    }

    /// Run a query against the current dataset
    pub async fn get_transactions(&self, query: &TransactionQuery) -> Result<Paginated<Transaction>> {
        let dataset = self.fetch_with_retry().await?;
        let result = query.run(&dataset);
        tracing::debug!(
            page = result.page,
            total = result.total,
            total_pages = result.total_pages,
            "transaction query served"
        );
        Ok(result)
    }

    async fn fetch_with_retry(&self) -> Result<Vec<Transaction>> {
        let mut last_error = None;
        for attempt in 1..=MAX_ATTEMPTS {
            match self.repository.all_transactions().await {
                Ok(dataset) => return Ok(dataset),
                Err(error) => {
                    tracing::warn!(%error, attempt, "transaction fetch failed");
                    last_error = Some(error);
                }
            }
        }
        // last_error is always set when we fall through the loop
        Err(last_error.expect("at least one attempt was made"))
    }
}
