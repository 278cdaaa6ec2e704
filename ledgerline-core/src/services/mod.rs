//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions. Each service
//! focuses on a specific use case or feature area.

mod accounts;
mod session;
mod transactions;
mod transfer;

pub use accounts::AccountService;
pub use session::{RefreshTask, SessionService};
pub use transactions::TransactionService;
pub use transfer::{TransferReceipt, TransferService};
