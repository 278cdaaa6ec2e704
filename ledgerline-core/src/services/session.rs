//! Session service - login, logout, current user, proactive refresh
//!
//! The session is an explicit, lifetime-scoped object: it owns the token
//! store, the codec, and (optionally) a periodic refresh task that is torn
//! down deterministically when the session ends or the handle drops.

use std::sync::{Arc, Mutex};
use std::time::Duration as StdDuration;

use chrono::{Duration, Utc};
use tokio::task::JoinHandle;

use crate::domain::result::Result;
use crate::domain::{AuthToken, Credentials, TokenCodec, User};
use crate::ports::{AuthBackend, TokenStore};

/// Orchestrates the session lifecycle
///
/// Logout is authoritative: every mutation of the stored token happens under
/// the session epoch lock, and a refresh that started before a logout (or a
/// new login) finds the epoch moved and discards its token instead of
/// resurrecting the dead session.
pub struct SessionService {
    backend: Arc<dyn AuthBackend>,
    store: Arc<dyn TokenStore>,
    codec: TokenCodec,
    refresh_threshold: Duration,
    check_interval: StdDuration,
    epoch: Mutex<u64>,
}

impl SessionService {
    pub fn new(
        backend: Arc<dyn AuthBackend>,
        store: Arc<dyn TokenStore>,
        codec: TokenCodec,
        refresh_threshold: Duration,
        check_interval: StdDuration,
    ) -> Self {
        Self {
            backend,
            store,
            codec,
            refresh_threshold,
            check_interval,
            epoch: Mutex::new(0),
        }
    }

    /// Validate the form, check credentials, mint and store a token
    pub async fn login(&self, credentials: &Credentials) -> Result<User> {
        credentials.validate()?;
        let user = self.backend.authenticate(credentials).await?;
        let token = self.codec.mint(&user);
        {
            let mut epoch = self.epoch.lock().expect("session epoch poisoned");
            *epoch += 1;
            self.store.save(&token)?;
        }
        tracing::info!(user = %user.email, expires_at = %token.expires_at, "session started");
        Ok(user)
    }

    /// Clear the stored token; idempotent, always succeeds on an empty store
    pub fn logout(&self) -> Result<()> {
        let mut epoch = self.epoch.lock().expect("session epoch poisoned");
        *epoch += 1;
        self.store.clear()?;
        tracing::info!("session cleared");
        Ok(())
    }

    /// The user behind the stored token, or `None` when absent or expired
    ///
    /// An expired or malformed token is cleared on sight. Never fails:
    /// storage errors degrade to "no session".
    pub fn current_user(&self) -> Option<User> {
        let token = match self.store.load() {
            Ok(Some(token)) => token,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "failed to read session store");
                return None;
            }
        };
        match self.codec.decode(&token.access_token) {
            Some(payload) => Some(payload.user()),
            None => {
                // Stale token; clearing counts as a session change so an
                // in-flight refresh cannot bring it back
                let mut epoch = self.epoch.lock().expect("session epoch poisoned");
                *epoch += 1;
                if let Err(error) = self.store.clear() {
                    tracing::warn!(%error, "failed to clear expired session");
                }
                None
            }
        }
    }

    /// Reissue the token when it is close to expiry
    ///
    /// Returns `false` when there is no valid session left to keep alive,
    /// which tells the periodic task (or any caller) to log out. A token
    /// still comfortably inside its window is left alone and reported `true`.
    pub fn refresh(&self) -> Result<bool> {
        let Some((epoch, token)) = self.begin_refresh()? else {
            return Ok(false);
        };
        self.commit_refresh(epoch, token)
    }

    /// First half of a refresh: decide whether a reissue is due
    ///
    /// Returns the observed epoch and the replacement token, or `None` when
    /// the session is gone. `Ok(Some(..))` with an unchanged token means the
    /// current one is still fresh.
    fn begin_refresh(&self) -> Result<Option<(u64, Option<AuthToken>)>> {
        let epoch = *self.epoch.lock().expect("session epoch poisoned");
        let Some(token) = self.store.load()? else {
            return Ok(None);
        };
        let Some(payload) = self.codec.decode(&token.access_token) else {
            // Expired while nobody was looking; clear unless someone else
            // already changed the session
            let mut current = self.epoch.lock().expect("session epoch poisoned");
            if *current == epoch {
                *current += 1;
                self.store.clear()?;
            }
            return Ok(None);
        };
        if token.time_until_expiry(Utc::now()) > self.refresh_threshold {
            return Ok(Some((epoch, None)));
        }
        let reissued = self.codec.mint(&payload.user());
        Ok(Some((epoch, Some(reissued))))
    }

    /// Second half: store the reissued token unless the session changed
    fn commit_refresh(&self, epoch: u64, reissued: Option<AuthToken>) -> Result<bool> {
        let Some(token) = reissued else {
            // Nothing to do, the session is fine as-is
            return Ok(true);
        };
        let current = self.epoch.lock().expect("session epoch poisoned");
        if *current != epoch {
            tracing::debug!("refresh abandoned, session changed while reissuing");
            return Ok(false);
        }
        self.store.save(&token)?;
        tracing::debug!(expires_at = %token.expires_at, "session token refreshed");
        Ok(true)
    }

    /// Start the periodic proactive-refresh check
    ///
    /// Checks every `check_interval`; when the session is gone the store is
    /// cleared and the task exits on its own. Dropping (or cancelling) the
    /// returned handle stops the task immediately, so the timer cannot leak
    /// past the owning scope.
    pub fn spawn_refresh_task(self: &Arc<Self>) -> RefreshTask {
        let service = Arc::clone(self);
        let period = service.check_interval;
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // interval's first tick is immediate; skip it so the first real
            // check happens one full period after spawn
            ticker.tick().await;
            loop {
                ticker.tick().await;
                match service.refresh() {
                    Ok(true) => {}
                    Ok(false) => {
                        if let Err(error) = service.logout() {
                            tracing::warn!(%error, "failed to clear ended session");
                        }
                        tracing::debug!("session ended, refresh task stopping");
                        break;
                    }
                    Err(error) => {
                        // Transient storage trouble; try again next tick
                        tracing::warn!(%error, "session refresh check failed");
                    }
                }
            }
        });
        RefreshTask { handle }
    }
}

/// Handle owning the periodic refresh task
///
/// Aborts the task when cancelled or dropped.
pub struct RefreshTask {
    handle: JoinHandle<()>,
}

impl RefreshTask {
    /// Stop the task now
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// True once the task has exited (session ended or cancelled)
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for RefreshTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
