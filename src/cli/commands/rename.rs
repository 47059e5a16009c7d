use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::{CommandResult, CommandSummary, RenameSummary};
use crate::{
    cli::args::RenameCommand,
    core::{SidecarRename, rename_sidecar},
    notices::Notice,
};

/// Move the `.uid` sidecar of every renamed file.
///
/// Relative paths are taken from `--root` when given, from the current
/// directory otherwise. Each pair is handled independently; a failed rename is
/// reported and the remaining pairs still run.
pub fn rename(cmd: RenameCommand) -> Result<CommandResult> {
    if cmd.paths.len() % 2 != 0 {
        bail!(
            "Expected OLD NEW path pairs, got {} path(s)",
            cmd.paths.len()
        );
    }

    let root = cmd.common.root.as_deref();
    if let Some(root) = root
        && !root.is_dir()
    {
        bail!("Project root does not exist: {}", root.display());
    }
    let resolve = |path: &Path| -> PathBuf {
        match root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    };

    let mut summary = RenameSummary::default();
    let mut notices = Vec::new();

    for pair in cmd.paths.chunks_exact(2) {
        let (old_path, new_path) = (resolve(&pair[0]), resolve(&pair[1]));
        match rename_sidecar(&old_path, &new_path) {
            Ok(SidecarRename::Renamed { from, to }) => {
                summary.renamed += 1;
                notices.push(Notice::info(format!(
                    "UID file renamed: {} → {}",
                    file_name(&from),
                    file_name(&to)
                )));
            }
            Ok(SidecarRename::NotFound { path }) => {
                summary.missing += 1;
                notices.push(Notice::warning(format!(
                    "UID file not found: {}",
                    file_name(&path)
                )));
            }
            Err(e) => {
                summary.failed += 1;
                notices.push(Notice::error(format!("{:#}", e)));
            }
        }
    }

    Ok(CommandResult::new(CommandSummary::Rename(summary), notices))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
