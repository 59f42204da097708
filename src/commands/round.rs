//! Deploy round handlers: `begin`, `promote`, `finish` and `mark`

use anyhow::Result;

use revroot::application::DeployRoundUseCase;
use revroot::domain::value_objects::MarkerKind;

use super::context::Context;

pub fn cmd_begin(ctx: &Context, rev: &str) -> Result<()> {
    let interrupted = DeployRoundUseCase::new(&ctx.store).begin(rev)?;
    let id = ctx.store.rev_id(rev)?;
    if ctx.json {
        println!(
            "{}",
            serde_json::json!({
                "type": "begin",
                "rev": id,
                "path": ctx.store.rev_path(rev)?,
                "interrupted": interrupted,
            })
        );
    } else {
        if let Some(previous) = interrupted {
            println!("Previous round for {} never finished", previous);
        }
        println!("Deploying {} into {}", id, ctx.store.rev_path(rev)?.display());
    }
    Ok(())
}

pub fn cmd_promote(ctx: &Context, rev: &str) -> Result<()> {
    let id = DeployRoundUseCase::new(&ctx.store).promote(rev)?;
    report(ctx, "promote", &id.to_string(), "is now current");
    Ok(())
}

pub fn cmd_finish(ctx: &Context, rev: &str) -> Result<()> {
    let id = DeployRoundUseCase::new(&ctx.store).finish(rev)?;
    report(ctx, "finish", &id.to_string(), "is done");
    Ok(())
}

/// Point a single marker at `rev` without the round checks.
pub fn cmd_mark(ctx: &Context, marker: MarkerKind, rev: &str) -> Result<()> {
    match marker {
        MarkerKind::Current => ctx.store.mark_rev_current(rev)?,
        MarkerKind::Done => ctx.store.mark_rev_done(rev)?,
        MarkerKind::InProgress => ctx.store.mark_rev_in_progress(rev)?,
    }
    let id = ctx.store.rev_id(rev)?;
    report(ctx, "mark", &id.to_string(), &format!("marked {}", marker));
    Ok(())
}

fn report(ctx: &Context, kind: &str, rev: &str, message: &str) {
    if ctx.json {
        println!("{}", serde_json::json!({ "type": kind, "rev": rev }));
    } else {
        println!("{} {}", rev, message);
    }
}
