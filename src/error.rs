//! Application error types.
//!
//! Defines `AppError` for every way a blame annotation can fail. None of these
//! reach the editor: the event handlers in `events` turn any `Err` into an
//! empty status slot.
//!
//! Error groups:
//! - `GitLaunch`, `GitFailed`, `Decode` → the git subprocess
//! - `InvalidPath`, `NoFile`, `NoCursor`, `RowOutOfRange` → resolving the file under the cursor
//! - `Unparsed`, `InvalidTimestamp` → reading the blame output
//! - `Json`, `Io` → the stdio host

use std::process::ExitStatus;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to launch git: {0}")]
    GitLaunch(#[source] std::io::Error),

    #[error("Git exited with {status}: {output}")]
    GitFailed { status: ExitStatus, output: String },

    #[error("Git output is not UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("View has no file on disk")]
    NoFile,

    #[error("View has no cursor")]
    NoCursor,

    #[error("Cursor row out of range: {0}")]
    RowOutOfRange(usize),

    #[error("Unrecognized blame output: {0:?}")]
    Unparsed(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
