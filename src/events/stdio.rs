//! JSON-lines editor host.
//!
//! Reads one `EditorEvent` per input line and answers each with exactly one
//! `StatusUpdate` line, in order. A line that is not a valid event is answered
//! with a cleared slot. The loop ends at end of input.
//!
//! ```text
//! > {"event":"selection_modified","file":"/src/app.py","row":9}
//! < {"key":"git_blame","text":"Alice, 2 days ago"}
//! ```

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::Result;
use crate::events::{BlameStatusListener, EditorView};
use crate::models::{EditorEvent, EventKind, StatusUpdate};

/// View backed by a single decoded event.
struct EventView<'a> {
    event: &'a EditorEvent,
    update: Option<StatusUpdate>,
}

impl EditorView for EventView<'_> {
    fn file_name(&self) -> Option<PathBuf> {
        self.event.file.clone()
    }

    fn cursor_row(&self) -> Option<usize> {
        self.event.row
    }

    fn set_status(&mut self, key: &str, text: &str) {
        self.update = Some(StatusUpdate {
            key: key.to_string(),
            text: text.to_string(),
        });
    }
}

pub fn serve<R: BufRead, W: Write>(listener: &BlameStatusListener, mut input: R, mut output: W) -> Result<()> {
    let mut handled = 0usize;
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        if buf.trim_ascii().is_empty() {
            continue;
        }

        let update = match std::str::from_utf8(&buf) {
            Ok(line) => handle_line(listener, line),
            Err(e) => {
                warn!(error = %e, "editor event is not UTF-8");
                cleared(listener)
            }
        };
        serde_json::to_writer(&mut output, &update)?;
        output.write_all(b"\n")?;
        output.flush()?;
        handled += 1;
    }

    info!(handled, "editor closed input");
    Ok(())
}

fn cleared(listener: &BlameStatusListener) -> StatusUpdate {
    StatusUpdate {
        key: listener.status_key().to_string(),
        text: String::new(),
    }
}

fn handle_line(listener: &BlameStatusListener, line: &str) -> StatusUpdate {
    let event: EditorEvent = match serde_json::from_str(line) {
        Ok(event) => event,
        Err(e) => {
            warn!(error = %e, "malformed editor event");
            return cleared(listener);
        }
    };

    let mut view = EventView {
        event: &event,
        update: None,
    };
    match event.event {
        EventKind::Load => listener.on_load(&mut view),
        EventKind::SelectionModified => listener.on_selection_modified(&mut view),
    }

    view.update.unwrap_or_else(|| cleared(listener))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlameOptions;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn run<I: AsRef<[u8]>>(listener: &BlameStatusListener, input: I) -> Vec<serde_json::Value> {
        let mut output = Vec::new();
        serve(listener, Cursor::new(input), &mut output).expect("serve");
        String::from_utf8(output)
            .expect("utf-8")
            .lines()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect()
    }

    #[test]
    fn answers_every_event_in_order() {
        let input = concat!(
            "{\"event\":\"load\"}\n",
            "\n",
            "not json\n",
            "{\"event\":\"selection_modified\",\"file\":null,\"row\":4}\n",
        );
        let updates = run(&BlameStatusListener::default(), input);

        let cleared = serde_json::json!({"key": "git_blame", "text": ""});
        assert_eq!(updates, vec![cleared.clone(), cleared.clone(), cleared]);
    }

    #[test]
    fn non_utf8_line_is_cleared_and_loop_continues() {
        let input: &[u8] = b"{\"event\":\"load\"}\n\xff\xfe\n{\"event\":\"selection_modified\"}\n";
        let updates = run(&BlameStatusListener::default(), input);

        let cleared = serde_json::json!({"key": "git_blame", "text": ""});
        assert_eq!(updates, vec![cleared.clone(), cleared.clone(), cleared]);
    }

    #[test]
    fn overflowing_row_is_cleared() {
        let input = format!(
            "{{\"event\":\"load\",\"file\":\"Cargo.toml\",\"row\":{}}}\n",
            usize::MAX
        );
        let updates = run(&BlameStatusListener::default(), input);
        assert_eq!(updates, vec![serde_json::json!({"key": "git_blame", "text": ""})]);
    }

    #[test]
    fn unknown_event_kind_is_cleared_under_custom_key() {
        let listener = BlameStatusListener::new(BlameOptions {
            status_key: "blame".to_string(),
            ..BlameOptions::default()
        });
        let updates = run(&listener, "{\"event\":\"close\",\"file\":\"/tmp/x\",\"row\":0}\n");
        assert_eq!(updates, vec![serde_json::json!({"key": "blame", "text": ""})]);
    }

    #[test]
    fn empty_input_writes_nothing() {
        assert!(run(&BlameStatusListener::default(), "").is_empty());
    }
}
