//! Messages exchanged with the editor over stdio.
//!
//! - `EditorEvent`: one JSON line read from the editor
//! - `StatusUpdate`: one JSON line written back
//!
//! Used by: `events::stdio` (the `serve` subcommand)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The view finished loading
    Load,
    /// The selection moved
    SelectionModified,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditorEvent {
    pub event: EventKind,
    /// Absent for unsaved buffers
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// 0-based row of the primary cursor
    #[serde(default)]
    pub row: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub key: String,
    pub text: String,
}
