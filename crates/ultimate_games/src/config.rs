//! Play configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::Player;

/// Settings for a terminal game against the CPU.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Name shown for the human player.
    #[serde(default = "default_player_name")]
    player_name: String,

    /// Mark the CPU plays. The human takes the other one.
    #[serde(default = "default_cpu_mark")]
    cpu_mark: Player,

    /// Pause before each CPU move, in milliseconds.
    #[serde(default = "default_cpu_delay_ms")]
    cpu_delay_ms: u64,

    /// Seed for the CPU. Drawn from the OS when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_name() -> String {
    "You".to_string()
}

fn default_cpu_mark() -> Player {
    Player::O
}

fn default_cpu_delay_ms() -> u64 {
    700
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            cpu_mark: default_cpu_mark(),
            cpu_delay_ms: default_cpu_delay_ms(),
            seed: None,
            log_filter: default_log_filter(),
        }
    }
}

impl PlayConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        debug!("Config file parsed");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        player_name: Option<String>,
        cpu_mark: Option<Player>,
        cpu_delay_ms: Option<u64>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(name) = player_name {
            self.player_name = name;
        }
        if let Some(mark) = cpu_mark {
            self.cpu_mark = mark;
        }
        if let Some(delay) = cpu_delay_ms {
            self.cpu_delay_ms = delay;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Logs the settings in effect.
    ///
    /// Call once a subscriber is installed; events from loading are lost
    /// when loading has to happen first.
    pub fn log_loaded(&self, path: &Path) {
        info!(
            path = %path.display(),
            player_name = %self.player_name,
            cpu_mark = %self.cpu_mark,
            cpu_delay_ms = self.cpu_delay_ms,
            seed = ?self.seed,
            "Config loaded"
        );
    }

    /// Mark played by the human.
    pub fn human_mark(&self) -> Player {
        self.cpu_mark.opponent()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlayConfig::default();
        assert_eq!(config.cpu_mark(), &Player::O);
        assert_eq!(config.human_mark(), Player::X);
        assert_eq!(*config.cpu_delay_ms(), 700);
        assert_eq!(config.seed(), &None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: PlayConfig = toml::from_str("cpu_mark = \"X\"\nseed = 9\n").unwrap();
        assert_eq!(config.cpu_mark(), &Player::X);
        assert_eq!(config.seed(), &Some(9));
        assert_eq!(config.player_name(), "You");
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = PlayConfig::default().with_overrides(None, None, Some(0), Some(3));
        assert_eq!(*config.cpu_delay_ms(), 0);
        assert_eq!(config.seed(), &Some(3));
        assert_eq!(config.cpu_mark(), &Player::O);
    }
}
