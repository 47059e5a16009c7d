//! Core extraction and reconciliation engine.
//!
//! Apart from verbose scan diagnostics nothing here prints; commands in `cli`
//! turn the results into notices.
//!
//! ## Pipeline
//!
//! 1. `file_scanner` walks the project, skipping `exclusion` suffixes, and
//!    runs `tokens` on every source and scene file.
//! 2. `reconcile` merges the resulting index into the translation table
//!    (`parsers::csv`).
//! 3. `reconcile` pushes table columns into language resources
//!    (`parsers::tres`).
//!
//! `sidecar` is independent: it keeps `.uid` files next to renamed scripts.

pub mod exclusion;
pub mod file_scanner;
pub mod parsers;
pub mod reconcile;
pub mod sidecar;
pub mod tokens;

pub use exclusion::ExclusionList;
pub use file_scanner::{ScanResult, TokenIndex, scan_tokens};
pub use parsers::csv::CsvTable;
pub use parsers::tres::{TokenDictionary, UpdateOutcome};
pub use reconcile::{LanguageOutcome, LanguageStatus, merge_scan, push_languages};
pub use sidecar::{SidecarRename, rename_sidecar};
pub use tokens::{FileKind, extract_tokens};
