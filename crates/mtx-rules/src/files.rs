//! File-existence capability injected into the evaluator.

use std::path::PathBuf;

/// Answers whether a project-relative path exists.
///
/// Implementations must not fail: anything that cannot be checked counts as
/// missing.
pub trait FileChecker {
    fn exists(&self, path: &str) -> bool;
}

impl<F> FileChecker for F
where
    F: Fn(&str) -> bool,
{
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// Checks paths against a project root on the local filesystem.
#[derive(Debug, Clone)]
pub struct ProjectFiles {
    root: PathBuf,
}

impl ProjectFiles {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileChecker for ProjectFiles {
    fn exists(&self, path: &str) -> bool {
        let relative = path.trim_start_matches("./");
        let exists = self.root.join(relative).is_file();
        if !exists {
            tracing::debug!(root = %self.root.display(), path, "referenced file not found");
        }
        exists
    }
}
