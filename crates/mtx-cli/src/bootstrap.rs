use std::path::Path;

use anyhow::Context;
use clap::ValueEnum;
use mtx_config::MatrixConfig;

use crate::cli::OutputFormat;

/// Load `.env` and layered config for the project at `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<MatrixConfig> {
    MatrixConfig::load_with_dotenv(project_root).with_context(|| {
        format!(
            "failed to load matrix configuration for {}",
            project_root.display()
        )
    })
}

/// Output format configured under `general.default_format`.
pub fn default_format(config: &MatrixConfig) -> anyhow::Result<OutputFormat> {
    OutputFormat::from_str(&config.general.default_format, true)
        .map_err(|error| anyhow::anyhow!("invalid general.default_format: {error}"))
}
