//! Ledgerline Core - business logic for the banking demo
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Pure entities and logic (Account, Transaction, token codec,
//!   the query engine)
//! - **ports**: Trait definitions for external dependencies (repositories,
//!   auth backend, token store)
//! - **services**: Business logic orchestration (session lifecycle, queries,
//!   transfers)
//! - **adapters**: Concrete implementations (seeded demo data, in-memory and
//!   file token stores)
//!
//! Everything is simulated: the "backend" is an in-process mock answering
//! after an artificial delay, and tokens are unsigned base64 payloads.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use adapters::{DemoAuthBackend, DemoLedger, FileTokenStore, InMemoryTokenStore, SimulatedDelay};
use config::Config;
use domain::TokenCodec;
use ports::TokenStore;
use services::{AccountService, SessionService, TransactionService, TransferService};

// Re-export commonly used types at crate root
pub use domain::result::{Error, Result};
pub use domain::{
    Account, AccountKind, AuthToken, Credentials, Currency, Paginated, Role, SortDirection,
    SortField, StatusFilter, Transaction, TransactionFilters, TransactionQuery, TransactionSort,
    TransactionStatus, User,
};
pub use services::{RefreshTask, TransferReceipt};

/// Main context for Ledgerline operations
///
/// The primary entry point for all business logic: configuration, the mock
/// data sources, and the services wired over them. Construct one per logical
/// session scope and drop it to tear everything down; there is no ambient
/// global state.
pub struct LedgerlineContext {
    pub config: Config,
    pub session_service: Arc<SessionService>,
    pub transaction_service: TransactionService,
    pub account_service: AccountService,
    pub transfer_service: TransferService,
}

impl LedgerlineContext {
    /// Create a context whose session survives in `app_dir` (CLI use)
    pub fn new(app_dir: &Path) -> Result<Self> {
        let config = Config::load(app_dir)?;
        let store = Arc::new(FileTokenStore::new(app_dir));
        Ok(Self::with_store(config, store))
    }

    /// Create a context with a process-lifetime session (embedding, tests)
    pub fn in_memory(config: Config) -> Self {
        Self::with_store(config, Arc::new(InMemoryTokenStore::new()))
    }

    /// Create a context over an explicit token store
    pub fn with_store(config: Config, store: Arc<dyn TokenStore>) -> Self {
        let delay = SimulatedDelay::new(config.simulate_latency);
        let ledger = Arc::new(DemoLedger::new(delay));
        let backend = Arc::new(DemoAuthBackend::new(delay));

        let session_service = Arc::new(SessionService::new(
            backend,
            store,
            TokenCodec::new(config.token_ttl()),
            config.refresh_threshold(),
            config.refresh_check_interval(),
        ));
        let transaction_service =
            TransactionService::new(Arc::clone(&ledger) as Arc<dyn ports::TransactionRepository>);
        let account_service =
            AccountService::new(Arc::clone(&ledger) as Arc<dyn ports::AccountRepository>);
        let transfer_service =
            TransferService::new(ledger as Arc<dyn ports::AccountRepository>, config.simulate_latency);

        Self {
            config,
            session_service,
            transaction_service,
            account_service,
            transfer_service,
        }
    }
}
