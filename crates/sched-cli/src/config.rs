//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use sched_core::SessionConfig;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Day layout used for every track.
    pub session: SessionConfig,

    /// Largest talk list accepted.
    pub max_talks: usize,

    /// Treat talks longer than every session as an error.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            max_talks: 64,
            strict: false,
        }
    }
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

        // Load from environment variables (SCHED_*, nested keys joined by "__")
        figment = figment.merge(Env::prefixed("SCHED_").split("__"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for sched.
///
/// On Linux: `~/.config/sched`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("sched"))
}
