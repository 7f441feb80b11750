//! `mtx annotate` behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AnnotateConfig {
    /// Copy the file to `<file>.bak` before writing the annotation.
    #[serde(default)]
    pub backup: bool,
}
