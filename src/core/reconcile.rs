//! Reconciliation between scans, the translation CSV and language resources.
//!
//! Two directions:
//! - scan → CSV: [`merge_scan`] folds freshly scanned tokens into an existing
//!   table without losing translations.
//! - CSV → resources: [`push_languages`] writes every language column into the
//!   `_tokens` block of its `.tres` file.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    path::{Path, PathBuf},
};

use super::{
    file_scanner::TokenIndex,
    parsers::{
        csv::{CsvTable, ORIGIN_COLUMN, TOKEN_COLUMN},
        tres::{UpdateOutcome, update_language_file},
    },
};
use crate::config::Config;

/// Separator between origins in the `origin` column.
pub const ORIGIN_SEPARATOR: &str = ";";

fn table_columns(languages: &[String]) -> Vec<String> {
    let mut columns = vec![TOKEN_COLUMN.to_string(), ORIGIN_COLUMN.to_string()];
    columns.extend(languages.iter().cloned());
    columns
}

/// Merge scanned tokens with an existing table.
///
/// The result holds the union of both token sets. A token seen in this scan
/// gets its new origins; otherwise it keeps its stored origin. Language values
/// are carried over from `existing`, empty for new tokens. Language columns
/// come from `existing` when it has a header, from `default_languages` when not.
pub fn merge_scan(
    index: &TokenIndex,
    existing: Option<&CsvTable>,
    default_languages: &[String],
) -> CsvTable {
    let languages: Vec<String> = match existing {
        Some(table) if !table.columns().is_empty() => table
            .language_columns()
            .into_iter()
            .map(String::from)
            .collect(),
        _ => default_languages.to_vec(),
    };

    let mut existing_rows: BTreeMap<&str, &[String]> = BTreeMap::new();
    if let Some(table) = existing {
        for row in table.rows() {
            if let Some(token) = table.field(row, TOKEN_COLUMN)
                && !token.is_empty()
            {
                existing_rows.insert(token, row);
            }
        }
    }

    let all_tokens: BTreeSet<&str> = index
        .tokens()
        .chain(existing_rows.keys().copied())
        .collect();

    let mut merged = CsvTable::new(table_columns(&languages));
    for token in all_tokens {
        let previous = existing_rows.get(token).copied();
        let stored = |column: &str| -> String {
            match (existing, previous) {
                (Some(table), Some(row)) => table.field(row, column).unwrap_or("").to_string(),
                _ => String::new(),
            }
        };

        let origin = match index.origins(token) {
            Some(origins) if !origins.is_empty() => origins.join(ORIGIN_SEPARATOR),
            _ => stored(ORIGIN_COLUMN),
        };

        let mut fields = vec![token.to_string(), origin];
        fields.extend(languages.iter().map(|lang| stored(lang.as_str())));
        merged.push_row(fields);
    }

    merged
}

/// Table seeded from a single file: every token with `origin` as its origin
/// and empty translations.
pub fn export_file_tokens(tokens: &BTreeSet<String>, origin: &str, languages: &[String]) -> CsvTable {
    let mut table = CsvTable::new(table_columns(languages));
    for token in tokens {
        let mut fields = vec![token.clone(), origin.to_string()];
        fields.extend(languages.iter().map(|_| String::new()));
        table.push_row(fields);
    }
    table
}

/// Dictionary key of a CSV token: `greeting` → `{greeting}`.
pub fn dictionary_key(token: &str) -> String {
    if token.starts_with('{') && token.ends_with('}') && token.len() > 1 {
        token.to_string()
    } else {
        format!("{{{}}}", token)
    }
}

/// `(key, value)` updates of one language column.
///
/// Rows with an empty token or an empty value are skipped. A token listed
/// twice keeps its first position and its last value.
pub fn language_updates(table: &CsvTable, language: &str) -> Vec<(String, String)> {
    let mut updates: Vec<(String, String)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in table.rows() {
        let token = table.field(row, TOKEN_COLUMN).unwrap_or("");
        let value = table.field(row, language).unwrap_or("");
        if token.is_empty() || value.is_empty() {
            continue;
        }

        let key = dictionary_key(token);
        match positions.get(&key) {
            Some(&idx) => updates[idx].1 = value.to_string(),
            None => {
                positions.insert(key.clone(), updates.len());
                updates.push((key, value.to_string()));
            }
        }
    }

    updates
}

/// What happened to one language resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageStatus {
    Updated { changed: usize },
    Unchanged,
    /// The resource exists but has no `_tokens` block.
    MissingBlock,
    /// No resource file for this language.
    MissingFile,
    /// Reading or writing the resource failed.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutcome {
    pub language: String,
    pub path: PathBuf,
    pub status: LanguageStatus,
}

/// Push every language column of `table` into its resource under `root`.
///
/// Each language is handled on its own; a missing or unwritable file does not
/// stop the others.
pub fn push_languages(table: &CsvTable, root: &Path, config: &Config) -> Vec<LanguageOutcome> {
    table
        .language_columns()
        .into_iter()
        .map(|language| {
            let path = config.language_file(root, language);
            let status = if !path.is_file() {
                LanguageStatus::MissingFile
            } else {
                let updates = language_updates(table, language);
                match update_language_file(&path, &updates) {
                    Ok(UpdateOutcome::Updated { changed }) => LanguageStatus::Updated { changed },
                    Ok(UpdateOutcome::Unchanged) => LanguageStatus::Unchanged,
                    Ok(UpdateOutcome::MissingBlock) => LanguageStatus::MissingBlock,
                    Err(e) => LanguageStatus::Failed(format!("{:#}", e)),
                }
            };
            LanguageOutcome {
                language: language.to_string(),
                path,
                status,
            }
        })
        .collect()
}
