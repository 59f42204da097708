//! revroot CLI - on-host revision store for fleet deployments
//!
//! Usage: revroot [--root <DIR>] [--env <ENV>] <COMMAND>
//!
//! Commands:
//!   setup     Create the root layout
//!   status    Show markers, round state and retention
//!   begin     Start a deploy round
//!   promote   Make a populated revision live
//!   finish    Close the round
//!   mark      Point one marker at a revision
//!   link      Point an arbitrary path at a revision
//!   prune     Remove revisions outside the retention window
//!   resolve   Resolve a path through the environment overlay
//!   cleanup   Empty the scratch directory

use anyhow::Result;
use clap::Parser;

use revroot::presentation::{logging, Cli, Commands};

mod commands;

use commands::context::Context;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (ctx, warnings) = match Context::from_cli(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            logging::init(cli.verbose, "warn");
            return Err(e);
        }
    };
    logging::init(cli.verbose, &ctx.config.log.level);
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    match &cli.command {
        Commands::Setup => commands::setup::cmd_setup(&ctx),
        Commands::Status => commands::status::cmd_status(&ctx),
        Commands::Begin { rev } => commands::round::cmd_begin(&ctx, rev),
        Commands::Promote { rev } => commands::round::cmd_promote(&ctx, rev),
        Commands::Finish { rev } => commands::round::cmd_finish(&ctx, rev),
        Commands::Mark { marker, rev } => commands::round::cmd_mark(&ctx, (*marker).into(), rev),
        Commands::Link { path, rev, backup } => {
            commands::link::cmd_link(&ctx, path, rev, *backup)
        }
        Commands::Prune { dry_run } => commands::prune::cmd_prune(&ctx, *dry_run),
        Commands::Resolve { path, all } => commands::resolve::cmd_resolve(&ctx, path, *all),
        Commands::Cleanup => commands::setup::cmd_cleanup(&ctx),
    }
}
