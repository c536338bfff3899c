use std::path::Path;

use crate::config::BlameOptions;
use crate::error::Result;
use crate::git::command::{run_git, FileLocation};

/// `git config user.name` as seen from the directory of `path`.
///
/// `Ok(None)` when the name is configured but blank.
pub fn current_user<P: AsRef<Path>>(path: P, options: &BlameOptions) -> Result<Option<String>> {
    let location = FileLocation::resolve(path)?;
    let name = run_git(options, &location.dir, ["config", "user.name"])?;
    let name = name.trim();

    Ok((!name.is_empty()).then(|| name.to_string()))
}
