//! Login command - start a session

use anyhow::Result;
use dialoguer::{Input, Password};
use ledgerline_core::Credentials;

use super::{get_context, spinner};
use crate::output;

pub async fn run(email: Option<String>, password: Option<String>) -> Result<()> {
    let ctx = get_context()?;

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = match password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let pb = spinner("Signing in...");
    let result = ctx
        .session_service
        .login(&Credentials::new(email, password))
        .await;
    pb.finish_and_clear();

    let user = result?;
    output::success(&format!("Signed in as {} <{}>", user.name, user.email));
    Ok(())
}
