//! Blame data transfer objects.
//!
//! `BlameRecord` is what the parser extracts from one line of `git blame`
//! output. `Annotation` is the finished result handed to the command line in
//! `--json` mode.

use serde::Serialize;

/// Author and date of the last change to a single line.
///
/// An unparseable blame yields `BlameRecord::default()`: every field empty,
/// never a half-filled record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BlameRecord {
    /// Author name, or "You" for uncommitted lines
    pub author: String,
    /// `YYYY-MM-DD HH:MM:SS` as printed by git
    pub timestamp: String,
    /// Zone printed after the timestamp, e.g. `+0200`
    pub utc_offset: Option<String>,
}

/// Annotation of a line, as shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Author after identity normalization
    pub author: String,
    pub timestamp: String,
    /// e.g. "2 days ago"
    pub relative_time: String,
    /// "<author>, <relative_time>"
    pub text: String,
}
