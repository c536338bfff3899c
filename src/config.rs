//! Per-invocation blame configuration.
//!
//! `BlameOptions` is built once from the command line and handed by reference
//! to every git invocation. Nothing here is global or mutated after startup.

use std::ffi::OsString;

/// Status-bar slot the annotation is written to.
pub const DEFAULT_STATUS_KEY: &str = "git_blame";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlameOptions {
    /// Program used for `git blame` and `git config`
    pub git_program: OsString,
    /// Pass `-w` so whitespace-only changes are skipped
    pub ignore_whitespace: bool,
    /// Key of the status-bar slot
    pub status_key: String,
}

impl Default for BlameOptions {
    fn default() -> Self {
        Self {
            git_program: OsString::from("git"),
            ignore_whitespace: false,
            status_key: DEFAULT_STATUS_KEY.to_string(),
        }
    }
}
