//! Whoami command - show the signed-in user

use anyhow::Result;

use super::{get_context, require_session};
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let user = require_session(&ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    let mut table = output::create_table();
    table.add_row(vec!["Id", &user.id]);
    table.add_row(vec!["Name", &user.name]);
    table.add_row(vec!["Email", &user.email]);
    table.add_row(vec!["Role", user.role.as_str()]);
    println!("{}", table);
    Ok(())
}
