use std::fs;

use anyhow::{Context, Result};

use super::{
    CommandResult, CommandSummary, ExtractFileSummary, context::ProjectContext,
};
use crate::{
    cli::args::ExtractFileCommand,
    core::{FileKind, extract_tokens, reconcile::export_file_tokens},
    notices::Notice,
};

/// Write a seed CSV holding the tokens of a single file.
///
/// Files that are neither scripts nor scenes are scanned without stripping
/// interpolated strings.
pub fn extract_file(cmd: ExtractFileCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let bytes = fs::read(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let kind = FileKind::from_path(&cmd.file, &ctx.config).unwrap_or(FileKind::Markup);
    let tokens = extract_tokens(&content, kind);

    if tokens.is_empty() {
        return Ok(CommandResult::new(
            CommandSummary::ExtractFile(ExtractFileSummary { token_count: 0 }),
            vec![Notice::info(format!(
                "No tokens found in {}.",
                cmd.file.display()
            ))],
        ));
    }

    let origin = cmd.file.display().to_string();
    let table = export_file_tokens(&tokens, &origin, &ctx.config.default_languages);
    table.write(&cmd.output)?;

    Ok(CommandResult::new(
        CommandSummary::ExtractFile(ExtractFileSummary {
            token_count: tokens.len(),
        }),
        vec![Notice::info(format!(
            "Language template saved: {}",
            cmd.output.display()
        ))],
    ))
}
