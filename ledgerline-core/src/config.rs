//! Configuration management
//!
//! Settings live in a `settings.json` in the app directory:
//! ```json
//! {
//!   "app": { "language": "en", "simulateLatency": true },
//!   "auth": { "tokenExpirationMinutes": 15, "refreshThresholdMinutes": 5 }
//! }
//! ```
//! Fields the core does not manage are preserved across saves.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration as StdDuration;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::domain::result::Result;

/// Display languages the demo ships strings for
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "es"];

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_TOKEN_EXPIRATION_MINUTES: i64 = 15;
const DEFAULT_REFRESH_THRESHOLD_MINUTES: i64 = 5;
const DEFAULT_REFRESH_CHECK_INTERVAL_SECS: u64 = 60;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    auth: AuthSettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_language")]
    language: String,
    #[serde(default = "default_true")]
    simulate_latency: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuthSettings {
    #[serde(default = "default_token_expiration")]
    token_expiration_minutes: i64,
    #[serde(default = "default_refresh_threshold")]
    refresh_threshold_minutes: i64,
    #[serde(default = "default_refresh_check_interval")]
    refresh_check_interval_secs: u64,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_true() -> bool {
    true
}

fn default_token_expiration() -> i64 {
    DEFAULT_TOKEN_EXPIRATION_MINUTES
}

fn default_refresh_threshold() -> i64 {
    DEFAULT_REFRESH_THRESHOLD_MINUTES
}

fn default_refresh_check_interval() -> u64 {
    DEFAULT_REFRESH_CHECK_INTERVAL_SECS
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            simulate_latency: true,
            other: HashMap::new(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            token_expiration_minutes: default_token_expiration(),
            refresh_threshold_minutes: default_refresh_threshold(),
            refresh_check_interval_secs: default_refresh_check_interval(),
        }
    }
}

/// Ledgerline configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Preferred display language, stored durably
    pub language: String,
    /// Whether mock calls pause for their artificial delay
    pub simulate_latency: bool,
    pub token_expiration_minutes: i64,
    pub refresh_threshold_minutes: i64,
    pub refresh_check_interval_secs: u64,
    // Raw settings kept for preservation when saving
    raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_settings(SettingsFile::default())
    }
}

impl Config {
    /// Load config from the app directory
    ///
    /// The artificial delay can be forced off via LEDGERLINE_SIMULATE_LATENCY
    /// (for CI and scripted use).
    pub fn load(app_dir: &Path) -> Result<Self> {
        let settings_path = app_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let mut config = Self::from_settings(raw);

        match std::env::var("LEDGERLINE_SIMULATE_LATENCY").ok().as_deref() {
            Some("true" | "1" | "yes" | "TRUE" | "YES") => config.simulate_latency = true,
            Some("false" | "0" | "no" | "FALSE" | "NO") => config.simulate_latency = false,
            _ => {}
        }

        Ok(config)
    }

    fn from_settings(raw: SettingsFile) -> Self {
        Self {
            language: raw.app.language.clone(),
            simulate_latency: raw.app.simulate_latency,
            token_expiration_minutes: raw.auth.token_expiration_minutes,
            refresh_threshold_minutes: raw.auth.refresh_threshold_minutes,
            refresh_check_interval_secs: raw.auth.refresh_check_interval_secs,
            raw_settings: raw,
        }
    }

    /// Save config to the app directory, preserving unmanaged fields
    pub fn save(&self, app_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(app_dir)?;
        let settings_path = app_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            self.raw_settings.clone()
        };

        settings.app.language = self.language.clone();
        settings.app.simulate_latency = self.simulate_latency;
        settings.auth.token_expiration_minutes = self.token_expiration_minutes;
        settings.auth.refresh_threshold_minutes = self.refresh_threshold_minutes;
        settings.auth.refresh_check_interval_secs = self.refresh_check_interval_secs;

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Token expiration window
    pub fn token_ttl(&self) -> Duration {
        Duration::minutes(self.token_expiration_minutes)
    }

    /// How close to expiry a token must be before refresh reissues it
    pub fn refresh_threshold(&self) -> Duration {
        Duration::minutes(self.refresh_threshold_minutes)
    }

    /// Cadence of the periodic refresh check
    pub fn refresh_check_interval(&self) -> StdDuration {
        StdDuration::from_secs(self.refresh_check_interval_secs)
    }
}
