use anyhow::Result;

use super::{
    CommandResult, CommandSummary, UpdateLanguagesSummary, context::ProjectContext,
};
use crate::{
    cli::args::UpdateLanguagesCommand,
    core::{CsvTable, LanguageOutcome, LanguageStatus, push_languages},
    notices::Notice,
};

/// Push every language column of a translation CSV into its `.tres` file.
pub fn update_languages(cmd: UpdateLanguagesCommand) -> Result<CommandResult> {
    let ctx = ProjectContext::new(&cmd.common)?;
    let table = CsvTable::read(&cmd.csv)?;

    let outcomes = push_languages(&table, ctx.root(), &ctx.config);

    let mut notices: Vec<Notice> = outcomes
        .iter()
        .filter_map(|outcome| outcome_notice(outcome, ctx.verbose))
        .collect();
    notices.push(Notice::info("Language files updated."));

    Ok(CommandResult::new(
        CommandSummary::UpdateLanguages(UpdateLanguagesSummary { outcomes }),
        notices,
    ))
}

fn outcome_notice(outcome: &LanguageOutcome, verbose: bool) -> Option<Notice> {
    let path = outcome.path.display();
    match &outcome.status {
        LanguageStatus::Updated { changed } => Some(Notice::info(format!(
            "{}: {} {} updated in {}",
            outcome.language,
            changed,
            if *changed == 1 { "entry" } else { "entries" },
            path
        ))),
        LanguageStatus::MissingFile => Some(Notice::warning(format!("File not found: {}", path))),
        LanguageStatus::Failed(reason) => Some(Notice::error(format!(
            "Failed to update {}: {}",
            path, reason
        ))),
        LanguageStatus::Unchanged if verbose => Some(Notice::info(format!(
            "{}: already up to date",
            outcome.language
        ))),
        LanguageStatus::MissingBlock if verbose => Some(Notice::info(format!(
            "{}: no _tokens block in {}, skipped",
            outcome.language, path
        ))),
        LanguageStatus::Unchanged | LanguageStatus::MissingBlock => None,
    }
}
