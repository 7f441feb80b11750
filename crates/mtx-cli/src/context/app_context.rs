use std::path::{Path, PathBuf};

use mtx_config::MatrixConfig;
use mtx_core::paths::MATRIX_FILE;
use mtx_core::{CoreError, Document};
use mtx_rules::ProjectFiles;

/// Everything a command needs to know about the project it runs in.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: MatrixConfig,
}

impl AppContext {
    #[must_use]
    pub const fn new(project_root: PathBuf, config: MatrixConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    #[must_use]
    pub fn matrix_path(&self) -> PathBuf {
        self.project_root.join(MATRIX_FILE)
    }

    /// Load the project's matrix document.
    ///
    /// # Errors
    ///
    /// Returns the [`CoreError`] from [`Document::load`].
    pub fn load_document(&self) -> Result<Document, CoreError> {
        Document::load(&self.matrix_path())
    }

    /// File checker rooted at the project.
    #[must_use]
    pub fn files(&self) -> ProjectFiles {
        ProjectFiles::new(&self.project_root)
    }

    /// Resolve a path given on the command line against the project root.
    #[must_use]
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}
