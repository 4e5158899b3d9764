use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Application configuration
///
/// Binary-level knobs only; the library API itself takes no configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub directory: DirectorySettings,
    #[serde(default)]
    pub submission: SubmissionSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectorySettings {
    /// Cap on how many results the demo prints per search
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionSettings {
    /// Simulated intake latency of the mock gateway
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl SubmissionSettings {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for DirectorySettings {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl Default for SubmissionSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_max_results() -> usize { 60 }
fn default_simulated_delay_ms() -> u64 { 2000 }
fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with ARTISTLY_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with ARTISTLY_)
            // e.g., ARTISTLY_SUBMISSION__SIMULATED_DELAY_MS -> submission.simulated_delay_ms
            .add_source(
                Environment::with_prefix("ARTISTLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("ARTISTLY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_submission_delay() {
        let submission = SubmissionSettings::default();
        assert_eq!(submission.simulated_delay(), Duration::from_millis(2000));
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_default_directory_limit() {
        assert_eq!(DirectorySettings::default().max_results, 60);
    }
}
