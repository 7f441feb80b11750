//! # mtx-config
//!
//! Layered configuration loading for the Matrix CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MATRIX_*` prefix, `__` as separator)
//! 2. Project-level `.matrix/config.toml`
//! 3. User-level `~/.config/matrix/config.toml`
//! 4. Built-in defaults
//!
//! `MATRIX_CHECK__FAIL_ON_WARNINGS=true` maps to `check.fail_on_warnings`.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use mtx_config::MatrixConfig;
//!
//! let config = MatrixConfig::load_with_dotenv(Path::new(".")).expect("config");
//! if config.check.fail_on_warnings {
//!     println!("warnings fail the check");
//! }
//! ```

mod annotate;
mod check;
mod error;
mod general;

pub use annotate::AnnotateConfig;
pub use check::CheckConfig;
pub use error::ConfigError;
pub use general::{GeneralConfig, OUTPUT_FORMATS};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use mtx_core::paths::MATRIX_DIR;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read into the config.
pub const ENV_PREFIX: &str = "MATRIX_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatrixConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub check: CheckConfig,
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

impl MatrixConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source cannot be parsed or a value is invalid.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load `<project_root>/.env` (or the nearest `.env` from the current
    /// directory) into the process environment, then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        load_dotenv(project_root);
        Self::load(project_root)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                tracing::debug!(path = %global_path.display(), "merging user config");
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `<project_root>/.matrix/config.toml`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(MATRIX_DIR).join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("matrix").join("config.toml"))
    }
}

/// Silently does nothing when there is no `.env`.
fn load_dotenv(project_root: &Path) {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        if let Err(error) = dotenvy::from_path(&env_path) {
            tracing::warn!(path = %env_path.display(), %error, "ignoring unreadable .env");
        }
        return;
    }
    let _ = dotenvy::dotenv();
}
