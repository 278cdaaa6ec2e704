//! CLI command implementations

pub mod accounts;
pub mod language;
pub mod login;
pub mod logout;
pub mod transactions;
pub mod transfer;
pub mod whoami;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use ledgerline_core::{LedgerlineContext, User};

/// Get the app directory from environment or default
pub fn get_app_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("LEDGERLINE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".ledgerline")
    }
}

/// Get or create the Ledgerline context
pub fn get_context() -> Result<LedgerlineContext> {
    let app_dir = get_app_dir();
    std::fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create app directory: {:?}", app_dir))?;
    LedgerlineContext::new(&app_dir).context("Failed to initialize Ledgerline")
}

/// Resolve the current session or fail with a sign-in hint
///
/// Also gives a near-expiry token a proactive refresh, the CLI's stand-in
/// for the browser's periodic check.
pub fn require_session(ctx: &LedgerlineContext) -> Result<User> {
    match ctx.session_service.current_user() {
        Some(user) => {
            if let Err(error) = ctx.session_service.refresh() {
                tracing::warn!(%error, "proactive refresh failed");
            }
            Ok(user)
        }
        None => bail!("not signed in (run `ll login`)"),
    }
}

/// Spinner shown while a simulated backend call is in flight
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if atty::is(atty::Stream::Stderr) {
        pb.set_style(ProgressStyle::with_template("{spinner} {msg}").expect("valid template"));
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(80));
    }
    pb
}
