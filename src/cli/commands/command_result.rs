use crate::core::LanguageOutcome;
use crate::notices::{Level, Notice};

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    ExtractFile(ExtractFileSummary),
    UpdateLanguages(UpdateLanguagesSummary),
    Rename(RenameSummary),
    Init,
}

#[derive(Debug)]
pub struct ExtractSummary {
    pub files_scanned: usize,
    pub skipped_count: usize,
    pub token_count: usize,
    /// Tokens that only exist in the previous CSV.
    pub kept_count: usize,
}

#[derive(Debug)]
pub struct ExtractFileSummary {
    pub token_count: usize,
}

#[derive(Debug)]
pub struct UpdateLanguagesSummary {
    pub outcomes: Vec<LanguageOutcome>,
}

#[derive(Debug, Default)]
pub struct RenameSummary {
    pub renamed: usize,
    pub missing: usize,
    pub failed: usize,
}

/// Result of running a gdlocale command
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Messages for the user, in the order they were produced.
    pub notices: Vec<Notice>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl CommandResult {
    pub fn new(summary: CommandSummary, notices: Vec<Notice>) -> Self {
        let count = |level: Level| notices.iter().filter(|n| n.level == level).count();
        let error_count = count(Level::Error);
        let warning_count = count(Level::Warning);

        Self {
            summary,
            notices,
            error_count,
            warning_count,
        }
    }
}
