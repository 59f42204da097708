//! Invocation context
//!
//! Resolves the root, environment, configuration and store every command
//! runs against. CLI flags win over `REVROOT_*` variables, which win over
//! the overlay config files.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use revroot::config::{environment_from_env, root_from_env, Config, ConfigWarning};
use revroot::domain::value_objects::RetentionWidth;
use revroot::infrastructure::{ConfigOverlay, PathSpace, RevisionStore, SymlinkReferences};
use revroot::presentation::Cli;

pub struct Context {
    pub store: RevisionStore,
    pub config: Config,
    pub json: bool,
}

impl Context {
    /// Build the context and return any config warnings for the caller to report
    /// once logging is up.
    pub fn from_cli(cli: &Cli) -> Result<(Self, Vec<ConfigWarning>)> {
        let root = resolve_root(cli.root.as_deref())?;
        let environment = cli.environment.clone().or_else(environment_from_env);
        let overlay = ConfigOverlay::new(PathSpace::new(root), environment);

        let (config, warnings) = Config::load_layered(&overlay)?;
        let config = config.with_env_overrides()?;

        let retention = match cli.keep {
            Some(keep) => RetentionWidth::new(keep).context("invalid --keep")?,
            None => config.retention.keep,
        };

        let mut store = RevisionStore::with_references(overlay, SymlinkReferences::new())
            .with_retention(retention);
        if let Some(config_rev) = &cli.config_rev {
            store
                .use_config_rev(config_rev.as_str())
                .context("invalid --config-rev")?;
        }

        Ok((
            Self {
                store,
                config,
                json: cli.json,
            },
            warnings,
        ))
    }
}

fn resolve_root(flag: Option<&Path>) -> Result<PathBuf> {
    let root = match flag.map(Path::to_path_buf).or_else(root_from_env) {
        Some(root) => root,
        None => std::env::current_dir().context("failed to read the working directory")?,
    };
    std::path::absolute(&root)
        .with_context(|| format!("failed to resolve root '{}'", root.display()))
}
