//! Running the git executable.
//!
//! Every query runs from the directory holding the file it is about, so git
//! discovers the enclosing repository on its own. Output is stdout followed
//! by stderr, decoded as strict UTF-8.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::BlameOptions;
use crate::error::{AppError, Result};

/// A file resolved for a git query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLocation {
    /// Canonical path of the file
    pub path: PathBuf,
    /// Directory git runs in
    pub dir: PathBuf,
}

impl FileLocation {
    pub fn resolve<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let canonical = std::fs::canonicalize(path)
            .map_err(|_| AppError::InvalidPath(path.display().to_string()))?;
        let dir = canonical
            .parent()
            .ok_or_else(|| AppError::InvalidPath(canonical.display().to_string()))?
            .to_path_buf();

        Ok(Self {
            path: canonical,
            dir,
        })
    }
}

pub fn run_git<I, S>(options: &BlameOptions, cwd: &Path, args: I) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = Command::new(&options.git_program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(AppError::GitLaunch)?;

    let mut combined = output.stdout;
    combined.extend_from_slice(&output.stderr);

    if !output.status.success() {
        return Err(AppError::GitFailed {
            status: output.status,
            output: String::from_utf8_lossy(&combined).trim().to_string(),
        });
    }

    Ok(String::from_utf8(combined)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_splits_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "hello\n").expect("write");

        let location = FileLocation::resolve(&file).expect("resolve");
        assert_eq!(location.path.file_name().unwrap(), "notes.txt");
        assert_eq!(location.dir, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn resolve_rejects_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = FileLocation::resolve(dir.path().join("missing.rs")).unwrap_err();
        assert!(matches!(err, AppError::InvalidPath(_)));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let options = BlameOptions {
            git_program: "definitely-not-a-git-binary-7f3a".into(),
            ..BlameOptions::default()
        };
        let err = run_git(&options, Path::new("."), ["--version"]).unwrap_err();
        assert!(matches!(err, AppError::GitLaunch(_)));
    }
}
