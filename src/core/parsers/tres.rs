//! Editing of the `_tokens` dictionary inside Godot `.tres` resources.
//!
//! A language resource holds exactly one block of the form
//!
//! ```text
//! _tokens = Dictionary[String, String]({
//! "{greeting}": "Hello",
//! "{farewell}": "Bye"
//! })
//! ```
//!
//! Only that block is ever rewritten; every byte around it is kept as-is.
//!
//! Values are read verbatim: `\"` stays two characters, and a value holding a
//! bare `"` is cut short at that quote. On write every `"` in a value becomes
//! `\"`. The asymmetry matches what existing resources already contain, so a
//! value read back from a file that holds `\"` will gain another backslash on
//! the next write.
//!
//! Keys are written without escaping. A token holding a `"` (`'{say "hi"}'` in
//! a scene) produces an entry that cannot be read back, so the next update
//! appends it again.

use std::{
    fs,
    ops::Range,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use regex::Regex;

const BLOCK_HEADER: &str = "_tokens = Dictionary[String, String]({\n";
const BLOCK_FOOTER: &str = "\n})";

static BLOCK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"_tokens\s*=\s*Dictionary\[String, String\]\(\{([\s\S]*?)\}\)"#).unwrap()
});

static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(\{[^"]+\})":\s*"((?:[^"\\]|\\.)*)""#).unwrap());

/// Ordered `{token}` → value mapping of a `_tokens` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenDictionary {
    entries: Vec<(String, String)>,
}

impl TokenDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the entries of a block body. Unrecognised text is skipped.
    pub fn parse_body(body: &str) -> Self {
        let mut dict = Self::new();
        for cap in ENTRY_REGEX.captures_iter(body) {
            dict.set(&cap[1], &cap[2]);
        }
        dict
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set a value, keeping the position of an existing key.
    ///
    /// Returns true if the stored value changed.
    pub fn set(&mut self, key: &str, value: &str) -> bool {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, current)) if current == value => false,
            Some((_, current)) => {
                *current = value.to_string();
                true
            }
            None => {
                self.entries.push((key.to_string(), value.to_string()));
                true
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render a complete `_tokens = ...` block.
    pub fn to_block_string(&self) -> String {
        let entries: Vec<String> = self
            .entries
            .iter()
            .map(|(k, v)| format!("\"{}\": \"{}\"", k, v.replace('"', "\\\"")))
            .collect();
        format!("{}{}{}", BLOCK_HEADER, entries.join(",\n"), BLOCK_FOOTER)
    }
}

/// Byte range of the first `_tokens` block in `text`.
pub fn find_block(text: &str) -> Option<Range<usize>> {
    BLOCK_REGEX.find(text).map(|m| m.range())
}

/// Parse the `_tokens` block of a resource.
///
/// Returns an empty dictionary when the block is missing.
pub fn parse_tokens_dict(text: &str) -> TokenDictionary {
    BLOCK_REGEX
        .captures(text)
        .map(|cap| TokenDictionary::parse_body(&cap[1]))
        .unwrap_or_default()
}

/// Result of applying updates to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The block was rewritten with `changed` new or modified entries.
    Updated { changed: usize },
    /// Every update already matched; nothing to write.
    Unchanged,
    /// The resource has no `_tokens` block; nothing to write.
    MissingBlock,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// A `.tres` file opened for editing its `_tokens` block.
pub struct TresEditor {
    file_path: PathBuf,
    content: String,
}

impl TresEditor {
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    pub fn from_content(path: &Path, content: String) -> Self {
        Self {
            file_path: path.to_path_buf(),
            content,
        }
    }

    /// Overlay `updates` (keys in `{token}` form) onto the block.
    ///
    /// The block is only re-rendered when at least one value differs.
    pub fn apply_updates(&mut self, updates: &[(String, String)]) -> UpdateOutcome {
        let Some(range) = find_block(&self.content) else {
            return UpdateOutcome::MissingBlock;
        };

        let mut dict = parse_tokens_dict(&self.content[range.clone()]);
        let mut changed = 0;
        for (key, value) in updates {
            if dict.set(key, value) {
                changed += 1;
            }
        }

        if changed == 0 {
            return UpdateOutcome::Unchanged;
        }

        self.content.replace_range(range, &dict.to_block_string());
        UpdateOutcome::Updated { changed }
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.file_path, &self.content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Apply `updates` to the resource at `path`, writing only if it changed.
pub fn update_language_file(path: &Path, updates: &[(String, String)]) -> Result<UpdateOutcome> {
    let mut editor = TresEditor::open(path)?;
    let outcome = editor.apply_updates(updates);
    if outcome.is_updated() {
        editor.save()?;
    }
    Ok(outcome)
}
