use std::path::{Path, PathBuf};

use chrono::{TimeDelta, Utc};
use git2::{ConfigLevel, Repository, Signature, Time};
use tempfile::TempDir;

pub fn git_available() -> bool {
    std::process::Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// "line 1\nline 2\n..." up to `count`.
pub fn numbered_lines(count: usize) -> String {
    (1..=count).map(|i| format!("line {}\n", i)).collect()
}

/// Throwaway repository with an optional local `user.name`.
pub struct Fixture {
    dir: TempDir,
    repo: Repository,
}

impl Fixture {
    pub fn new(identity: Option<&str>) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let repo = Repository::init(dir.path()).expect("init repository");

        if let Some(name) = identity {
            repo.config()
                .and_then(|config| config.open_level(ConfigLevel::Local))
                .and_then(|mut local| local.set_str("user.name", name))
                .expect("set user.name");
        }

        Self { dir, repo }
    }

    /// Writes `contents` to `name` and commits it as `author`, `age` ago.
    pub fn commit_file(&self, name: &str, contents: &str, author: &str, age: TimeDelta) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("write file");

        let mut index = self.repo.index().expect("index");
        index.add_path(Path::new(name)).expect("stage file");
        index.write().expect("write index");
        let tree = self
            .repo
            .find_tree(index.write_tree().expect("write tree"))
            .expect("find tree");

        let when = Time::new((Utc::now() - age).timestamp(), 0);
        let email = format!("{}@example.com", author.to_lowercase());
        let signature = Signature::new(author, &email, &when).expect("signature");

        let parent = self.repo.head().ok().and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &signature, &signature, "update", &tree, &parents)
            .expect("commit");

        path
    }
}
