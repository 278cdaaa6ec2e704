//! Auth backend port - the simulated credential check

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Credentials, User};

/// Credential verification boundary
///
/// The demo adapter compares against a single hardcoded account after an
/// artificial delay; against a real backend this becomes `POST /auth/login`.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Verify credentials, returning the authenticated user
    ///
    /// Fails with [`Error::InvalidCredentials`] on a mismatch.
    ///
    /// [`Error::InvalidCredentials`]: crate::domain::result::Error::InvalidCredentials
    async fn authenticate(&self, credentials: &Credentials) -> Result<User>;
}
