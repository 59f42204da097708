//! `link` handler

use std::path::Path;

use anyhow::{Context as _, Result};

use super::context::Context;

pub fn cmd_link(ctx: &Context, path: &Path, rev: &str, backup: bool) -> Result<()> {
    let path = std::path::absolute(path)
        .with_context(|| format!("failed to resolve '{}'", path.display()))?;
    let backup = backup || ctx.config.link.backup;

    let moved = ctx.store.link_path_to_rev(&path, rev, backup)?;
    let target = ctx.store.rev_path(rev)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "link",
                "path": path,
                "target": target,
                "backup": moved,
            })
        );
    } else {
        if let Some(moved) = &moved {
            println!("Moved {} to {}", path.display(), moved.display());
        }
        println!("{} -> {}", path.display(), target.display());
    }
    Ok(())
}
