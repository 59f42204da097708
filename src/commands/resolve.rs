//! `resolve` handler

use std::path::Path;

use anyhow::Result;

use super::context::Context;

pub fn cmd_resolve(ctx: &Context, relative: &Path, all: bool) -> Result<()> {
    let overlay = ctx.store.overlay();
    let paths = if all {
        overlay.env_specific_paths([relative])
    } else {
        vec![overlay.env_specific_path(relative)]
    };

    if ctx.json {
        println!("{}", serde_json::to_string(&paths)?);
    } else {
        for path in paths {
            println!("{}", path.display());
        }
    }
    Ok(())
}
