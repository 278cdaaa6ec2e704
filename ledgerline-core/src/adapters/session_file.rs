//! File-backed token store for the CLI
//!
//! A CLI process has no tab lifetime to scope the token to, so the session
//! lives in a `session.json` under the app directory instead, cleared on
//! logout or when an expired token is read.

use std::path::{Path, PathBuf};

use crate::domain::result::Result;
use crate::domain::AuthToken;
use crate::ports::TokenStore;

/// Session file name in the app directory
const SESSION_FILE: &str = "session.json";

/// Token store backed by a JSON file
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(app_dir: &Path) -> Self {
        Self {
            path: app_dir.join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<AuthToken>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path)?;
        // An unreadable session file means no session, not a hard error
        Ok(serde_json::from_str(&contents).ok())
    }

    fn save(&self, token: &AuthToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(token)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            std::fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
