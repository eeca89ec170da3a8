//! Configuration loading and management.

use std::path::{Path, PathBuf};

use dl_core::LayoutConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// How commands print their results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
///
/// Layout settings sit at the top level of the file:
///
/// ```toml
/// output = "text"
///
/// [anchors]
/// breakfast = "07:30"
///
/// [spans]
/// default_minutes = 30
///
/// [periods.morning]
/// start = "05:00"
/// end = "12:00"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format when `--json` is not given.
    #[serde(default)]
    pub output: OutputFormat,

    /// Periods, anchors and span durations used for every layout.
    #[serde(flatten)]
    pub layout: LayoutConfig,
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DL_*), nested keys split on "__"
        figment = figment.merge(Env::prefixed("DL_").split("__"));

        figment.extract()
    }

    /// Resolves the output format, letting a `--json` flag win.
    pub const fn output_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// Returns the platform-specific config directory for daylane.
///
/// On Linux: `~/.config/daylane`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("daylane"))
}
