//! Trait definitions for external dependencies

mod auth;
mod repository;
mod token_store;

pub use auth::AuthBackend;
pub use repository::{AccountRepository, TransactionRepository};
pub use token_store::TokenStore;
