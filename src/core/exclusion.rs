use std::{fs, path::Path};

/// Path suffixes skipped by tree scans.
///
/// Matching is a plain string suffix test on the full path, no globbing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionList {
    suffixes: Vec<String>,
}

impl ExclusionList {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }

    /// Load the list from a file with one suffix per line.
    ///
    /// A missing or unreadable file yields an empty list.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    pub fn parse(content: &str) -> Self {
        let suffixes = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self { suffixes }
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.suffixes.is_empty() {
            return false;
        }
        let path_str = path.to_string_lossy();
        self.suffixes
            .iter()
            .any(|suffix| path_str.ends_with(suffix.as_str()))
    }

    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }
}
