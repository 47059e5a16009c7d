use std::path::PathBuf;

use anyhow::{Result, bail};

use super::{
    CommandResult, CommandSummary, ExtractSummary, context::ProjectContext,
};
use crate::{
    cli::args::ExtractCommand,
    core::{CsvTable, ExclusionList, merge_scan, scan_tokens},
    notices::Notice,
};

/// Scan the whole project and merge the tokens into the translation CSV.
pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let output: PathBuf = match cmd.output {
        Some(path) => path,
        None => ctx.project_path(&ctx.config.output_csv),
    };

    let exclusions = ExclusionList::load(&ctx.config.exclusion_path(ctx.root()));
    let scan = scan_tokens(ctx.root(), &ctx.config, &exclusions, ctx.verbose);

    let mut notices = Vec::new();
    if scan.index.is_empty() {
        notices.push(Notice::info("No tokens found in project."));
        return Ok(CommandResult::new(
            CommandSummary::Extract(ExtractSummary {
                files_scanned: scan.files_scanned,
                skipped_count: scan.skipped_count,
                token_count: 0,
                kept_count: 0,
            }),
            notices,
        ));
    }

    // An unreadable table is not silently replaced: the translations in it
    // would be lost.
    let existing = if output.exists() {
        if !output.is_file() {
            bail!("Output path is not a file: {}", output.display());
        }
        Some(CsvTable::read(&output)?)
    } else {
        None
    };

    let merged = merge_scan(&scan.index, existing.as_ref(), &ctx.config.default_languages);
    merged.write(&output)?;

    let token_count = merged.rows().len();
    notices.push(Notice::info(format!(
        "Language template saved: {}",
        output.display()
    )));

    Ok(CommandResult::new(
        CommandSummary::Extract(ExtractSummary {
            files_scanned: scan.files_scanned,
            skipped_count: scan.skipped_count,
            token_count,
            kept_count: token_count - scan.index.len(),
        }),
        notices,
    ))
}
