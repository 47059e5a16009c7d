//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `extract`: Scan the project and merge tokens into the translation CSV
//! - `extract-file`: Write a seed CSV for the tokens of a single file
//! - `update-languages`: Push CSV translations into language `.tres` files
//! - `rename`: Move `.uid` sidecars after source files were renamed
//! - `init`: Initialize gdlocale configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Extract(cmd)) => cmd.common.verbose,
            Some(Command::ExtractFile(cmd)) => cmd.common.verbose,
            Some(Command::UpdateLanguages(cmd)) => cmd.common.verbose,
            Some(Command::Rename(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Project root (default: directory of .gdlocalerc.json, else current directory)
    #[arg(long, env = "GDLOCALE_ROOT")]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ExtractCommand {
    /// Translation CSV to create or merge into (default: `outputCsv` from config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExtractFileCommand {
    /// Source or scene file to scan
    pub file: PathBuf,

    /// CSV file to write
    #[arg(short, long)]
    pub output: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UpdateLanguagesCommand {
    /// Translation CSV whose language columns are pushed
    pub csv: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RenameCommand {
    /// Renamed files as OLD NEW pairs: `rename a.cs b.cs c.cs d.cs`
    #[arg(required = true, num_args = 2.., value_name = "OLD NEW")]
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract tokens from all scripts and scenes into the translation CSV
    Extract(ExtractCommand),
    /// Write a translation CSV for the tokens of one file
    ExtractFile(ExtractFileCommand),
    /// Add or update language .tres files from a translation CSV
    UpdateLanguages(UpdateLanguagesCommand),
    /// Rename .uid sidecar files to follow renamed source files
    Rename(RenameCommand),
    /// Initialize a new .gdlocalerc.json configuration file
    Init,
}
