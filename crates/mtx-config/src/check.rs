//! `mtx check` behaviour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckConfig {
    /// Exit non-zero when the report has warnings but no errors.
    #[serde(default)]
    pub fail_on_warnings: bool,

    /// Include passing findings in table output.
    #[serde(default)]
    pub show_passes: bool,
}
