//! CLI Argument Parsing
//!
//! Global flags (`--root`, `--env`, `--config-rev`, `--keep`, `--json`,
//! `-v`) are inherited by every subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::MarkerKind;

/// Marker accepted by `revroot mark`.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerArg {
    Current,
    Done,
    InProgress,
}

impl From<MarkerArg> for MarkerKind {
    fn from(arg: MarkerArg) -> Self {
        match arg {
            MarkerArg::Current => MarkerKind::Current,
            MarkerArg::Done => MarkerKind::Done,
            MarkerArg::InProgress => MarkerKind::InProgress,
        }
    }
}

/// revroot - on-host revision store for fleet deployments
#[derive(Parser, Debug)]
#[command(name = "revroot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Revision root (defaults to $REVROOT_ROOT, then the working directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Overlay environment (defaults to $REVROOT_ENV)
    #[arg(long = "env", global = true)]
    pub environment: Option<String>,

    /// Address revisions as <config-rev>_<code-rev>
    #[arg(long, global = true)]
    pub config_rev: Option<String>,

    /// Number of most recent revisions retention always keeps
    #[arg(long, global = true)]
    pub keep: Option<usize>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the root, scratch, revision and cache directories
    Setup,

    /// Show markers, round state and retention for the root
    Status,

    /// Start a deploy round: mark a revision in progress
    Begin {
        /// Code revision being deployed
        rev: String,
    },

    /// Make a populated revision live
    Promote {
        /// Code revision to promote
        rev: String,
    },

    /// Mark a revision done and close the round
    Finish {
        /// Code revision that completed
        rev: String,
    },

    /// Point one marker at a revision directly
    Mark {
        #[arg(value_enum)]
        marker: MarkerArg,
        /// Code revision
        rev: String,
    },

    /// Atomically point an arbitrary path at a revision
    Link {
        /// Path to replace with a reference
        path: PathBuf,
        /// Code revision
        rev: String,
        /// Move existing content aside instead of refusing
        #[arg(long)]
        backup: bool,
    },

    /// Remove revisions outside the retention window
    Prune {
        /// List candidates without deleting them
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the environment-specific location of a relative path
    Resolve {
        /// Path relative to the overlay
        path: PathBuf,
        /// Print every existing overlay layer instead of one path
        #[arg(long)]
        all: bool,
    },

    /// Empty the scratch directory
    Cleanup,
}
