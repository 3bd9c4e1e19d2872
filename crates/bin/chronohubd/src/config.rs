//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `chronohub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scheduler settings.
    pub scheduler: SchedulerConfig,
    /// Snapshot persistence settings.
    pub snapshot: SnapshotConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Datetime entity settings.
    pub entity: EntityConfig,
}

/// Scheduler tick configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Tick period in milliseconds.
    pub tick_ms: u64,
}

/// Snapshot persistence configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// File the packed record is written to.
    pub path: String,
    /// Disable persistence entirely (volatile in-memory store).
    pub volatile: bool,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Datetime entity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Entity name used in logs and events.
    pub name: String,
    /// Optional initial value (`YYYY-MM-DD HH:MM:SS`), applied only when
    /// no snapshot is restored.
    pub initial: Option<String>,
}

impl Config {
    /// Load configuration from `chronohub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if a
    /// value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("chronohub.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CHRONOHUB_TICK_MS") {
            if let Ok(tick_ms) = val.parse() {
                self.scheduler.tick_ms = tick_ms;
            }
        }
        if let Ok(val) = std::env::var("CHRONOHUB_SNAPSHOT_PATH") {
            self.snapshot.path = val;
        }
        if let Ok(val) = std::env::var("CHRONOHUB_ENTITY_NAME") {
            self.entity.name = val;
        }
        if let Ok(val) = std::env::var("CHRONOHUB_INITIAL") {
            self.entity.initial = Some(val);
        }
        if let Ok(val) = std::env::var("CHRONOHUB_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scheduler.tick_ms == 0 {
            return Err(ConfigError::Validation(
                "scheduler.tick_ms must be non-zero".to_string(),
            ));
        }
        if let Some(initial) = &self.entity.initial {
            if initial.parse::<chronohub_domain::datetime::DateTimeValue>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "entity.initial {initial:?} is not of the form YYYY-MM-DD HH:MM:SS"
                )));
            }
        }
        Ok(())
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { tick_ms: 1000 }
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            path: "chronohub.snapshot".to_string(),
            volatile: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            name: "datetime".to_string(),
            initial: None,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.scheduler.tick_ms, 1000);
        assert_eq!(config.snapshot.path, "chronohub.snapshot");
        assert!(!config.snapshot.volatile);
        assert_eq!(config.logging.filter, "info");
        assert_eq!(config.entity.name, "datetime");
        assert!(config.entity.initial.is_none());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scheduler.tick_ms, 1000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [scheduler]
            tick_ms = 250

            [snapshot]
            path = '/var/lib/chronohub/state.bin'
            volatile = true

            [logging]
            filter = 'debug'

            [entity]
            name = 'bedtime'
            initial = '2024-01-01 07:30:00'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.scheduler.tick_ms, 250);
        assert_eq!(config.snapshot.path, "/var/lib/chronohub/state.bin");
        assert!(config.snapshot.volatile);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.entity.name, "bedtime");
        assert_eq!(config.entity.initial.as_deref(), Some("2024-01-01 07:30:00"));
    }

    fn config_with_initial(initial: &str) -> Config {
        Config {
            entity: EntityConfig {
                initial: Some(initial.to_string()),
                ..EntityConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn should_reject_zero_tick_period() {
        let config = Config {
            scheduler: SchedulerConfig { tick_ms: 0 },
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_reject_malformed_initial_value() {
        let config = config_with_initial("2024/01/01");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn should_accept_well_formed_initial_value() {
        let config = config_with_initial("2024-01-01 07:30:00");
        assert!(config.validate().is_ok());
    }
}
