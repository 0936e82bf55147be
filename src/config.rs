use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the vacation JSON file the demo shell loads.
    #[serde(default = "default_vacation_file")]
    pub vacation_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            vacation_file: default_vacation_file(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CalendarConfig {
    /// Default view when none is given on the command line.
    #[serde(default = "default_view")]
    pub default_view: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            default_view: default_view(),
        }
    }
}

fn default_vacation_file() -> String {
    "vacation.json".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_view() -> String {
    "schedule".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PARKPLAN__DATA__VACATION_FILE, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; defaults cover everything.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PARKPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = Config::load(Some("does-not-exist.toml".to_string())).unwrap();
        assert_eq!(config.data.vacation_file, "vacation.json");
        assert_eq!(config.observability.log_level, "info");
        assert_eq!(config.calendar.default_view, "schedule");
    }
}
