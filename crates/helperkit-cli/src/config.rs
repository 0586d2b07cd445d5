//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate only sees the [`ReportOptions`] it
//! carries.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `HELPERKIT__REPORT__DUMP_DEPTH=2`
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use helperkit_core::domain::ReportOptions;

/// Prefix of environment overrides; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "HELPERKIT";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Debug report settings.
    pub report: ReportOptions,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human`, `plain` or `json`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// With `require_file`, a file given with `--config` must exist. The
    /// default location is always optional.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::active_path(config_file),
            require_file && config_file.is_some(),
        )
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("failed to build default configuration")?;

        let settings = config::Config::builder()
            .add_source(defaults)
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .with_context(|| format!("invalid configuration in {}", path.display()))
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.helperkit.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "helperkit", "helperkit")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".helperkit.toml"))
    }

    /// The file `init` writes to and `config path` prints.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }
}
