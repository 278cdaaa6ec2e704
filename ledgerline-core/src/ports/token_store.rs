//! Token store port - transient session storage
//!
//! The browser original kept the token in tab-scoped sessionStorage under a
//! single well-known key. Adapters reproduce that surface: an in-process
//! store for embedding and tests, a session file for the CLI.

use crate::domain::result::Result;
use crate::domain::AuthToken;

/// Storage for the current session token
///
/// Holds at most one token. Implementations must be safe to call from the
/// refresh task and the UI flow concurrently; the session service serializes
/// writes itself.
pub trait TokenStore: Send + Sync {
    /// The stored token, if any (no expiry check here)
    fn load(&self) -> Result<Option<AuthToken>>;

    /// Replace the stored token
    fn save(&self, token: &AuthToken) -> Result<()>;

    /// Remove the stored token; succeeds when nothing is stored
    fn clear(&self) -> Result<()>;
}
