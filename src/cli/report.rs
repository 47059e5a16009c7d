//! Report formatting and printing utilities.
//!
//! Separate from command logic so gdlocale can be used as a library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, RenameSummary, UpdateLanguagesSummary,
};
use crate::{
    core::LanguageStatus,
    notices::{Level, Notice},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    for notice in &result.notices {
        print_notice(notice, writer);
    }

    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, verbose, writer),
        CommandSummary::ExtractFile(summary) if verbose => {
            let _ = writeln!(
                writer,
                "Found {} {}",
                summary.token_count,
                plural(summary.token_count, "token", "tokens")
            );
        }
        CommandSummary::UpdateLanguages(summary) if verbose => {
            print_update_languages(summary, writer)
        }
        CommandSummary::Rename(summary) if verbose => print_rename(summary, writer),
        _ => {}
    }

    print_summary(result, writer);
}

fn print_notice<W: Write>(notice: &Notice, writer: &mut W) {
    let _ = match notice.level {
        Level::Info => writeln!(writer, "{} {}", SUCCESS_MARK.green(), notice.message),
        Level::Warning => writeln!(writer, "{} {}", "warning:".bold().yellow(), notice.message),
        Level::Error => writeln!(writer, "{} {}", "error:".bold().red(), notice.message),
    };
}

fn print_extract<W: Write>(summary: &ExtractSummary, verbose: bool, writer: &mut W) {
    if verbose {
        let _ = writeln!(
            writer,
            "Scanned {} {}, {} {}{}",
            summary.files_scanned,
            plural(summary.files_scanned, "file", "files"),
            summary.token_count,
            plural(summary.token_count, "token", "tokens"),
            if summary.kept_count > 0 {
                format!(" ({} kept from existing CSV)", summary.kept_count)
            } else {
                String::new()
            }
        );
    } else if summary.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read (use {} for details)",
            "warning:".bold().yellow(),
            summary.skipped_count,
            "-v".cyan()
        );
    }
}

fn print_update_languages<W: Write>(summary: &UpdateLanguagesSummary, writer: &mut W) {
    let count = |matches: fn(&LanguageStatus) -> bool| {
        summary.outcomes.iter().filter(|o| matches(&o.status)).count()
    };
    let total = summary.outcomes.len();

    let _ = writeln!(
        writer,
        "Processed {} {}: {} updated, {} missing",
        total,
        plural(total, "language", "languages"),
        count(|s| matches!(s, LanguageStatus::Updated { .. })),
        count(|s| matches!(s, LanguageStatus::MissingFile))
    );
}

fn print_rename<W: Write>(summary: &RenameSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} renamed, {} not found, {} failed",
        summary.renamed, summary.missing, summary.failed
    );
}

fn print_summary<W: Write>(result: &CommandResult, writer: &mut W) {
    let total_problems = result.error_count + result.warning_count;
    if total_problems == 0 || result.notices.len() < 2 {
        return;
    }

    let _ = writeln!(
        writer,
        "\n{} {} {} ({} {}, {} {})",
        FAILURE_MARK.red(),
        total_problems,
        plural(total_problems, "problem", "problems"),
        result.error_count,
        plural(result.error_count, "error", "errors").red(),
        result.warning_count,
        plural(result.warning_count, "warning", "warnings").yellow()
    );
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}
