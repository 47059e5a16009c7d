//! Codecs for the two file formats the tool edits.
//!
//! - `csv`: the quoted translation table
//! - `tres`: the `_tokens` dictionary block of Godot language resources

pub mod csv;
pub mod tres;
