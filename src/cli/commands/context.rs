use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result, bail};
use colored::Colorize;

use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
};

/// Project settings resolved once per command.
pub struct ProjectContext {
    pub config: Config,
    pub root_dir: PathBuf,
    pub verbose: bool,
}

impl ProjectContext {
    /// Resolve the project root and load its configuration.
    ///
    /// The root is `--root` when given, otherwise the directory holding the
    /// config file, otherwise the current directory.
    pub fn new(args: &CommonArgs) -> Result<Self> {
        let cwd = env::current_dir().context("Failed to determine current directory")?;
        let start_dir = match &args.root {
            Some(root) => cwd.join(root),
            None => cwd.clone(),
        };

        if !start_dir.is_dir() {
            bail!("Project root does not exist: {}", start_dir.display());
        }

        let loaded = load_config(&start_dir)?;
        if args.verbose {
            match &loaded.config_dir {
                Some(dir) => eprintln!(
                    "{} using config from {}",
                    "note:".bold(),
                    dir.display()
                ),
                None => eprintln!("{} no config file found, using defaults", "note:".bold()),
            }
        }

        let root_dir = match (&args.root, loaded.config_dir) {
            (Some(_), _) => start_dir,
            (None, Some(config_dir)) => config_dir,
            (None, None) => cwd,
        };

        Ok(Self {
            config: loaded.config,
            root_dir,
            verbose: args.verbose,
        })
    }

    /// Resolve a project-relative path from the config.
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.root_dir.join(relative)
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }
}
