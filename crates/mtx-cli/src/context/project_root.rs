use std::path::{Path, PathBuf};

use mtx_core::paths::MATRIX_DIR;

/// Walk upwards from `start` until a `.matrix` directory is found.
#[must_use]
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(MATRIX_DIR).is_dir() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}
