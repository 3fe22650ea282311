//! CLI configuration.
//!
//! Settings live in a TOML file (`ranger.toml` by default). Every field has
//! a default, so a partial file or no file at all is fine.

use std::fs;
use std::path::{Path, PathBuf};

use ranger_common::{ConfigError, RangerResult};
use ranger_gameplay::SessionConfig;
use ranger_world::GeneratorConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "ranger.toml";

/// Log levels accepted in `log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangerConfig {
    /// Map seed (None = random)
    pub seed: Option<u32>,
    /// Log level for the ranger crates
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Map generation settings
    pub generator: GeneratorConfig,
    /// Game session rules
    pub session: SessionConfig,
}

impl Default for RangerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: "info".to_string(),
            log_json: false,
            generator: GeneratorConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

/// A loaded configuration and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    /// The validated configuration
    pub config: RangerConfig,
    /// Where it was looked up
    pub path: PathBuf,
    /// Whether the file existed
    pub found: bool,
    /// Settings validation had to change
    pub adjustments: Vec<String>,
}

impl LoadedConfig {
    /// Logs where the config came from and every adjustment made to it.
    pub fn log(&self) {
        if self.found {
            info!("Loaded config from {}", self.path.display());
        } else {
            info!("Config file {} not found, using defaults", self.path.display());
        }
        for adjustment in &self.adjustments {
            warn!("{}: {adjustment}", self.path.display());
        }
    }
}

impl RangerConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// read or parsed is an error. The result is validated; nothing is
    /// logged here, so callers can load before the subscriber exists and
    /// report with [`LoadedConfig::log`] afterwards.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<LoadedConfig, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(LoadedConfig {
                config: Self::default(),
                path: path.to_path_buf(),
                found: false,
                adjustments: Vec::new(),
            });
        }

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Self = toml::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let adjustments = config.validate();
        Ok(LoadedConfig {
            config,
            path: path.to_path_buf(),
            found: true,
            adjustments,
        })
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> RangerResult<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents)?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Clamps values to sensible ranges. Returns a note for every setting
    /// that had to change.
    pub fn validate(&mut self) -> Vec<String> {
        let mut adjustments = Vec::new();

        let generator = self.generator.clone();
        self.generator.validate();
        if self.generator != generator {
            adjustments.push("generator settings clamped to supported ranges".to_string());
        }

        let session = self.session.clone();
        self.session.validate();
        if self.session != session {
            adjustments.push("session settings clamped to supported ranges".to_string());
        }

        let level = self.log_level.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            self.log_level = level;
        } else {
            adjustments.push(format!("unknown log level {:?}, using info", self.log_level));
            self.log_level = "info".to_string();
        }

        adjustments
    }

    /// Default `tracing` filter directive for the ranger crates.
    #[must_use]
    pub fn log_directive(&self) -> String {
        format!("ranger={}", self.log_level)
    }
}
