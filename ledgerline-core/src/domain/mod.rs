//! Core domain entities and pure logic
//!
//! Everything here is I/O-free: models, the token codec, and the transaction
//! query engine. Side effects live in services and adapters.

mod account;
pub mod query;
pub mod result;
mod token;
mod transaction;
mod user;

pub use account::{Account, AccountKind, Currency};
pub use query::{
    Paginated, SortDirection, SortField, StatusFilter, TransactionFilters, TransactionQuery,
    TransactionSort,
};
pub use token::{AuthToken, TokenCodec, TokenPayload};
pub use transaction::{Transaction, TransactionStatus};
pub use user::{Credentials, Role, User};
