//! Editor event handlers - maps view events to a status-bar update.
//!
//! The host editor is reached through the `EditorView` trait, so the
//! pipeline runs the same for a real plugin bridge or a test double:
//! - `on_load`: the view finished loading
//! - `on_selection_modified`: the primary cursor moved
//!
//! Both run `update_status_bar`, which blames the cursor line and writes
//! "<author>, <age>" into one named slot. Any failure clears the slot.
//!
//! Submodules:
//! - `stdio`: JSON-lines host used by the `serve` subcommand

pub mod stdio;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::config::BlameOptions;
use crate::error::{AppError, Result};
use crate::git::{current_user, get_blame, parse_blame, YOU};
use crate::models::{Annotation, BlameRecord};
use crate::relative_time::{commit_time, format_relative_time};

/// What the listener needs from an editor view.
pub trait EditorView {
    /// File backing the view, `None` for unsaved buffers.
    fn file_name(&self) -> Option<PathBuf>;

    /// 0-based row of the primary cursor.
    fn cursor_row(&self) -> Option<usize>;

    fn set_status(&mut self, key: &str, text: &str);
}

/// Writes blame information for the cursor line to the status bar.
#[derive(Debug, Clone, Default)]
pub struct BlameStatusListener {
    options: BlameOptions,
}

impl BlameStatusListener {
    pub fn new(options: BlameOptions) -> Self {
        Self { options }
    }

    pub fn status_key(&self) -> &str {
        &self.options.status_key
    }

    pub fn on_load<V: EditorView + ?Sized>(&self, view: &mut V) {
        update_status_bar(view, &self.options);
    }

    pub fn on_selection_modified<V: EditorView + ?Sized>(&self, view: &mut V) {
        update_status_bar(view, &self.options);
    }
}

/// Refreshes the blame slot of `view`, clearing it on any failure.
pub fn update_status_bar<V: EditorView + ?Sized>(view: &mut V, options: &BlameOptions) {
    let text = match view_annotation(view, options) {
        Ok(annotation) => annotation.text,
        Err(e) => {
            debug!(error = %e, "clearing blame status");
            String::new()
        }
    };
    view.set_status(&options.status_key, &text);
}

fn view_annotation<V: EditorView + ?Sized>(view: &V, options: &BlameOptions) -> Result<Annotation> {
    let path = view.file_name().ok_or(AppError::NoFile)?;
    let row = view.cursor_row().ok_or(AppError::NoCursor)?;
    let line = row.checked_add(1).ok_or(AppError::RowOutOfRange(row))?;
    annotate_line(&path, line, options)
}

/// Blames one 1-based line of `path` and builds its annotation.
pub fn annotate_line(path: &Path, line: usize, options: &BlameOptions) -> Result<Annotation> {
    let blame = get_blame(line, path, options)?;
    let record = parse_blame(&blame)?;

    // A missing identity only disables the "You" substitution.
    let user = current_user(path, options).unwrap_or_else(|e| {
        debug!(error = %e, "no git identity");
        None
    });

    annotate(record, user.as_deref(), Utc::now())
}

/// Turns a parsed record into the status annotation.
pub fn annotate(record: BlameRecord, user: Option<&str>, now: DateTime<Utc>) -> Result<Annotation> {
    let relative_time = format_relative_time(commit_time(&record)?, now);

    let author = match user {
        Some(user) if user == record.author => YOU.to_string(),
        _ => record.author,
    };

    Ok(Annotation {
        text: format!("{}, {}", author, relative_time),
        author,
        timestamp: record.timestamp,
        relative_time,
    })
}
