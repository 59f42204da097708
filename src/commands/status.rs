//! `status` handler

use anyhow::Result;

use revroot::application::StatusUseCase;
use revroot::presentation::views::render_status;

use super::context::Context;

pub fn cmd_status(ctx: &Context) -> Result<()> {
    let report = StatusUseCase::new(&ctx.store).execute()?;
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_status(&report));
    }
    Ok(())
}
