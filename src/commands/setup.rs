//! `setup` and `cleanup` handlers

use anyhow::Result;

use super::context::Context;

pub fn cmd_setup(ctx: &Context) -> Result<()> {
    ctx.store.setup()?;
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "type": "setup", "root": ctx.store.paths().root() })
        );
    } else {
        println!("Initialized {}", ctx.store.paths().root().display());
    }
    Ok(())
}

pub fn cmd_cleanup(ctx: &Context) -> Result<()> {
    let paths = ctx.store.paths();
    paths.cleanup()?;
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({ "type": "cleanup", "temp_dir": paths.temp_dir() })
        );
    } else {
        println!("Emptied {}", paths.temp_dir().display());
    }
    Ok(())
}
