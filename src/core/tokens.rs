//! Token extraction from source and scene text.
//!
//! A token is a key wrapped in braces and quoted with one of `"`, `'` or
//! `` ` ``, the same quote on both sides: `"{menu.start}"`. The key is the
//! text between the braces.

use std::{borrow::Cow, collections::BTreeSet, path::Path, sync::LazyLock};

use regex::Regex;

use crate::config::Config;

// One alternative per quote character, since the closing quote must match the
// opening one.
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""\{([^}]+)\}"|'\{([^}]+)\}'|`\{([^}]+)\}`"#).unwrap()
});

// C# interpolated literals: $"..." and $@"...", backslash escapes one char.
static INTERPOLATED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\$@?"(?:[^"\\]|\\.)*""#).unwrap());

/// The two kinds of files the scanner distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileKind {
    /// C# source. Interpolated strings are removed before scanning.
    Source,
    /// Scene markup, scanned as-is.
    Markup,
}

impl FileKind {
    /// Classify a path by extension (case-insensitive).
    ///
    /// Returns `None` for files that tree scans should not read.
    pub fn from_path(path: &Path, config: &Config) -> Option<Self> {
        let ext = path.extension()?.to_str()?;

        if extension_matches(ext, &config.source_extension) {
            Some(FileKind::Source)
        } else if extension_matches(ext, &config.markup_extension) {
            Some(FileKind::Markup)
        } else {
            None
        }
    }
}

fn extension_matches(ext: &str, configured: &str) -> bool {
    ext.eq_ignore_ascii_case(configured.trim_start_matches('.'))
}

/// Remove every interpolated string literal from C# source.
pub fn strip_interpolated_strings(text: &str) -> Cow<'_, str> {
    INTERPOLATED_STRING_REGEX.replace_all(text, "")
}

/// Extract the distinct token keys found in `text`.
pub fn extract_tokens(text: &str, kind: FileKind) -> BTreeSet<String> {
    let text = match kind {
        FileKind::Source => strip_interpolated_strings(text),
        FileKind::Markup => Cow::Borrowed(text),
    };

    TOKEN_REGEX
        .captures_iter(&text)
        .filter_map(|cap| {
            cap.get(1)
                .or_else(|| cap.get(2))
                .or_else(|| cap.get(3))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}
