//! Configuration management for the occupancy tracker

use std::collections::HashSet;
use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

/// Room list and input rules applied to every new session
#[derive(Debug, Deserialize, Clone)]
pub struct RosterConfig {
    /// Room numbers in report order
    pub rooms: Vec<String>,
    /// Reject guest counts that are not an integer between 1 and 10
    #[serde(default)]
    pub strict_guests: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShareConfig {
    /// Messaging link prefix; the URL-encoded report is appended to it
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub roster: RosterConfig,
    #[serde(default)]
    pub share: ShareConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // OCCUPANCY__ROSTER__STRICT_GUESTS=true, OCCUPANCY__ROSTER__ROOMS=101,102
            .add_source(
                Environment::with_prefix("OCCUPANCY")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("roster.rooms"),
            )
            .build()?;

        let config: AppConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.roster.validate()
    }
}

impl RosterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rooms.is_empty() {
            return Err(ConfigError::Message("roster.rooms must not be empty".into()));
        }

        let mut seen = HashSet::with_capacity(self.rooms.len());
        for room in &self.rooms {
            if room.trim().is_empty() {
                return Err(ConfigError::Message("roster.rooms contains an empty room number".into()));
            }
            if !seen.insert(room.as_str()) {
                return Err(ConfigError::Message(format!(
                    "roster.rooms lists room {} more than once",
                    room
                )));
            }
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for RosterConfig {
    fn default() -> Self {
        let rooms = [1, 2, 3]
            .iter()
            .flat_map(|floor| (1..=9).map(move |n| format!("{}0{}", floor, n)))
            .collect();

        Self {
            rooms,
            strict_guests: false,
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            base_url: "https://wa.me/?text=".to_string(),
        }
    }
}
