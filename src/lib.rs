//! Git blame for the line under the cursor, rendered for an editor status bar.
//!
//! The pipeline is synchronous and stateless: one `git blame` per event,
//! parsed into a `BlameRecord`, aged with `relative_time`, and written to a
//! single status slot as "<author>, <age>". Failures never reach the editor;
//! they leave the slot empty.
//!
//! - `git`: subprocess invocation, blame parsing, identity lookup
//! - `relative_time`: "N units ago" labels
//! - `events`: the `EditorView` host trait, listener, and stdio host
//! - `models`: records and wire messages
//! - `config`: per-invocation `BlameOptions`

pub mod config;
pub mod error;
pub mod events;
pub mod git;
pub mod models;
pub mod relative_time;

pub use config::BlameOptions;
pub use error::{AppError, Result};
pub use events::{annotate_line, BlameStatusListener, EditorView};
