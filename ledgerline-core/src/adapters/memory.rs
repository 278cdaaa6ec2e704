//! In-process token store
//!
//! The direct analog of the browser's tab-scoped sessionStorage: the token
//! lives exactly as long as the process.

use std::sync::Mutex;

use crate::domain::result::Result;
use crate::domain::AuthToken;
use crate::ports::TokenStore;

/// Token store backed by process memory
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: Mutex<Option<AuthToken>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<AuthToken>> {
        Ok(self.token.lock().expect("token store poisoned").clone())
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        *self.token.lock().expect("token store poisoned") = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().expect("token store poisoned") = None;
        Ok(())
    }
}
