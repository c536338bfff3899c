//! Single-line `git blame` and its parser.
//!
//! The query asks git for exactly one line using the `--minimal` diff
//! heuristic. The parser pulls the author and timestamp out of the default
//! (human) blame format:
//!
//! ```text
//! 3f2a91c4 (Alice Smith 2026-10-17 09:12:44 +0200 10)     return x
//! 00000000 (Not Committed Yet 2026-10-19 11:02:10 +0200 10)     return y
//! ```

use std::ffi::OsStr;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::BlameOptions;
use crate::error::{AppError, Result};
use crate::git::command::{run_git, FileLocation};
use crate::models::BlameRecord;

/// Author shown for lines the current user has not committed yet.
pub const YOU: &str = "You";

/// Author git prints for uncommitted lines.
const NOT_COMMITTED: &str = "Not Committed Yet";

static AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\w ]+)\d{4}-\d{2}-\d{2}").expect("valid regex"));

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})(?: ([+-]\d{4}))?").expect("valid regex")
});

/// Runs `git blame` for one 1-based line of `path`.
pub fn get_blame<P: AsRef<Path>>(line: usize, path: P, options: &BlameOptions) -> Result<String> {
    let location = FileLocation::resolve(path)?;
    let range = format!("{line},{line}");

    let mut args = vec![OsStr::new("blame"), OsStr::new("--minimal")];
    if options.ignore_whitespace {
        args.push(OsStr::new("-w"));
    }
    args.extend([
        OsStr::new("-L"),
        OsStr::new(&range),
        OsStr::new("--"),
        location.path.as_os_str(),
    ]);

    let blame = run_git(options, &location.dir, args)?;
    debug!(line, path = %location.path.display(), blame = %blame.trim_end(), "git blame");
    Ok(blame)
}

/// Extracts author and timestamp from raw blame output.
///
/// Both patterns must match, otherwise the whole parse fails. When the output
/// carries git's "Not Committed Yet" placeholder anywhere, the author is
/// reported as [`YOU`].
pub fn parse_blame(blame: &str) -> Result<BlameRecord> {
    let unparsed = || AppError::Unparsed(blame.trim_end().to_string());

    let author = AUTHOR_RE
        .captures(blame)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .filter(|author| !author.is_empty())
        .ok_or_else(unparsed)?;
    let timestamp = TIMESTAMP_RE.captures(blame).ok_or_else(unparsed)?;

    let author = if blame.contains(NOT_COMMITTED) {
        YOU
    } else {
        author
    };

    Ok(BlameRecord {
        author: author.to_string(),
        timestamp: timestamp[1].to_string(),
        utc_offset: timestamp.get(2).map(|m| m.as_str().to_string()),
    })
}
