//! `prune` handler

use anyhow::{bail, Result};

use revroot::application::{PruneOptions, PruneUseCase};
use revroot::presentation::views::render_prune;

use super::context::Context;

pub fn cmd_prune(ctx: &Context, dry_run: bool) -> Result<()> {
    let options = PruneOptions::new().with_dry_run(dry_run);
    let result = PruneUseCase::new(&ctx.store).execute(&options)?;

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", render_prune(&result));
    }

    if !result.is_success() {
        bail!("{} revision(s) could not be pruned", result.failed.len());
    }
    Ok(())
}
