//! Language command - durable preferred-language setting

use anyhow::{bail, Result};
use ledgerline_core::config::SUPPORTED_LANGUAGES;

use super::{get_app_dir, get_context};
use crate::output;

pub fn run(code: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    match code {
        None => {
            println!("{}", ctx.config.language);
        }
        Some(code) => {
            let code = code.to_lowercase();
            if !SUPPORTED_LANGUAGES.contains(&code.as_str()) {
                bail!(
                    "unsupported language {:?} (available: {})",
                    code,
                    SUPPORTED_LANGUAGES.join(", ")
                );
            }
            let mut config = ctx.config;
            config.language = code.clone();
            config.save(&get_app_dir())?;
            output::success(&format!("Language set to {}", code));
        }
    }
    Ok(())
}
