//! gdlocale - localization token tooling for Godot C# projects
//!
//! gdlocale scans C# sources and scene files for `{TOKEN}` placeholders, keeps a
//! translation CSV in sync with them, pushes translated columns into per-language
//! `.tres` dictionaries, and moves `.uid` sidecars when files are renamed.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Token extraction, CSV/`.tres` reconciliation and sidecar handling
//! - `notices`: Per-item messages produced by commands

pub mod cli;
pub mod config;
pub mod core;
pub mod notices;
