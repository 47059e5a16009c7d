use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Extension Godot appends to a script's sidecar: `Player.cs` → `Player.cs.uid`.
pub const SIDECAR_EXTENSION: &str = "uid";

/// Path of the sidecar file that belongs to `path`.
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}

/// Result of moving one sidecar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidecarRename {
    Renamed { from: PathBuf, to: PathBuf },
    /// `<old>.uid` does not exist.
    NotFound { path: PathBuf },
}

/// Rename `<old_path>.uid` to `<new_path>.uid` after a source file moved.
///
/// A missing sidecar is not an error. Failing to rename an existing one is.
pub fn rename_sidecar(old_path: &Path, new_path: &Path) -> Result<SidecarRename> {
    let from = sidecar_path(old_path);
    let to = sidecar_path(new_path);

    if !from.exists() {
        return Ok(SidecarRename::NotFound { path: from });
    }

    fs::rename(&from, &to).with_context(|| {
        format!(
            "Failed to rename UID file {} to {}",
            from.display(),
            to.display()
        )
    })?;

    Ok(SidecarRename::Renamed { from, to })
}
