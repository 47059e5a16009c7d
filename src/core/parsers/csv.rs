//! The quoted CSV dialect used for translation tables.
//!
//! ```text
//! token,origin,EN_US,PT_BR
//! "menu.start","scenes/menu.tscn","Start","Iniciar"
//! ```
//!
//! Header names are bare. Every data field is wrapped in `"` with inner quotes
//! doubled. Commas inside header names are not supported, and unquoted data
//! fields are not recognised at all.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

pub const TOKEN_COLUMN: &str = "token";
pub const ORIGIN_COLUMN: &str = "origin";

static QUOTED_FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"]|"")*)""#).unwrap());

/// A parsed translation table: a header and the rows that fit it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Parse table text.
    ///
    /// The first non-blank line is the header. A data line is kept only when
    /// its number of quoted fields equals the number of header columns; any
    /// other line is dropped without error. A leading byte order mark is
    /// ignored.
    pub fn parse(content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let mut lines = content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty());

        let Some(header) = lines.next() else {
            return Self::default();
        };

        let columns: Vec<String> = header.split(',').map(unquote_header).collect();

        let rows = lines
            .filter_map(|line| {
                let fields = parse_quoted_fields(line);
                (fields.len() == columns.len()).then_some(fields)
            })
            .collect();

        Self { columns, rows }
    }

    /// Read and parse a table file.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self::parse(&content))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every column except `token` and `origin`, in header order.
    pub fn language_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != TOKEN_COLUMN && *c != ORIGIN_COLUMN)
            .collect()
    }

    /// Append a row, padded or truncated to the header width.
    pub fn push_row(&mut self, mut fields: Vec<String>) {
        fields.resize(self.columns.len(), String::new());
        self.rows.push(fields);
    }

    /// Value of `column` in `row`, if the column exists.
    pub fn field<'a>(&self, row: &'a [String], column: &str) -> Option<&'a str> {
        self.column_index(column)
            .and_then(|idx| row.get(idx))
            .map(String::as_str)
    }

    /// Serialize with rows sorted by token.
    ///
    /// Lines are joined with `\n` and the output has no trailing newline.
    pub fn to_csv_string(&self) -> String {
        let mut rows: Vec<&Vec<String>> = self.rows.iter().collect();
        if let Some(token_idx) = self.column_index(TOKEN_COLUMN) {
            rows.sort_by(|a, b| a[token_idx].cmp(&b[token_idx]));
        }

        let mut lines = Vec::with_capacity(rows.len() + 1);
        lines.push(self.columns.join(","));
        for row in rows {
            let fields: Vec<String> = row.iter().map(|f| escape_field(f)).collect();
            lines.push(fields.join(","));
        }
        lines.join("\n")
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, self.to_csv_string())
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

/// Strip one leading and one trailing quote from a header name.
fn unquote_header(name: &str) -> String {
    let name = name.strip_prefix('"').unwrap_or(name);
    name.strip_suffix('"').unwrap_or(name).to_string()
}

fn parse_quoted_fields(line: &str) -> Vec<String> {
    QUOTED_FIELD_REGEX
        .captures_iter(line)
        .map(|cap| cap[1].replace("\"\"", "\""))
        .collect()
}

/// Quote a field, doubling inner quotes.
pub fn escape_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
