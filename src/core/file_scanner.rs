use std::{
    collections::BTreeMap,
    fs,
    path::{Component, Path},
};

use colored::Colorize;
use walkdir::WalkDir;

use super::{
    exclusion::ExclusionList,
    tokens::{FileKind, extract_tokens},
};
use crate::config::Config;

/// Tokens found in a tree, each with the files it was seen in.
///
/// Origins keep the order they were first observed in and never repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndex {
    tokens: BTreeMap<String, Vec<String>>,
}

impl TokenIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, origin: &str) {
        let origins = self.tokens.entry(token.to_string()).or_default();
        if !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }

    pub fn origins(&self, token: &str) -> Option<&[String]> {
        self.tokens.get(token).map(Vec::as_slice)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Tokens in ascending order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.tokens
            .iter()
            .map(|(token, origins)| (token.as_str(), origins.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Result of scanning a tree.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub index: TokenIndex,
    pub files_scanned: usize,
    /// Entries that could not be walked or read.
    pub skipped_count: usize,
}

/// Walk `root` depth-first and collect the tokens of every source and markup
/// file that is not excluded.
///
/// Excluded directories are pruned with their whole subtree. Unreadable files
/// are counted in `skipped_count` and otherwise ignored. Invalid UTF-8 is
/// replaced, so such files are still scanned.
pub fn scan_tokens(
    root: &Path,
    config: &Config,
    exclusions: &ExclusionList,
    verbose: bool,
) -> ScanResult {
    let mut result = ScanResult::default();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !exclusions.is_excluded(e.path()));

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let Some(kind) = FileKind::from_path(path, config) else {
            continue;
        };

        // Decoded lossily; only I/O failures skip a file.
        let content = match fs::read(path) {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => {
                result.skipped_count += 1;
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
                continue;
            }
        };

        result.files_scanned += 1;
        let origin = origin_path(root, path);
        for token in extract_tokens(&content, kind) {
            result.index.insert(&token, &origin);
        }
    }

    result
}

/// Path of `path` relative to `root`, `/`-separated.
pub fn origin_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
