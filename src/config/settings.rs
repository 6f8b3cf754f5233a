use crate::config::toml_config::TomlConfig;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_SUITE_NAME: &str = "HomeXPros Search API";
pub const DEFAULT_HINT_COMMAND: &str = "cd server && npm run dev";

const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Resolved run configuration. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    pub isolate: bool,
    pub suite_name: String,
    pub hint_command: String,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
            isolate: false,
            suite_name: DEFAULT_SUITE_NAME.to_string(),
            hint_command: DEFAULT_HINT_COMMAND.to_string(),
        }
    }
}

impl RunSettings {
    /// Defaults overlaid with whatever the file sets.
    pub fn from_toml(config: &TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            base_url: config.target.base_url.clone().unwrap_or(defaults.base_url),
            timeout_seconds: config.target.timeout_seconds,
            isolate: config.run.isolate.unwrap_or(defaults.isolate),
            suite_name: config.run.suite_name.clone().unwrap_or(defaults.suite_name),
            hint_command: config
                .run
                .hint_command
                .clone()
                .unwrap_or(defaults.hint_command),
        }
    }
}

impl ConfigProvider for RunSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    fn isolate_checks(&self) -> bool {
        self.isolate
    }

    fn suite_name(&self) -> &str {
        &self.suite_name
    }

    fn hint_command(&self) -> &str {
        &self.hint_command
    }
}

impl Validate for RunSettings {
    fn validate(&self) -> Result<()> {
        // 不檢查 URL 格式，錯誤的 URL 會在請求時失敗
        validate_non_empty_string("target.base_url", &self.base_url)?;
        validate_non_empty_string("run.suite_name", &self.suite_name)?;

        if let Some(timeout) = self.timeout_seconds {
            validate_range("target.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runner::{FailureMode, RunnerOptions};

    #[test]
    fn test_defaults() {
        let settings = RunSettings::default();
        assert_eq!(settings.base_url(), "http://localhost:5000/api");
        assert!(settings.timeout().is_none());
        assert_eq!(RunnerOptions::from_config(&settings).mode, FailureMode::FailFast);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_toml_overlays_defaults() {
        let config = TomlConfig::from_toml_str(
            "[target]\ntimeout_seconds = 20\n[run]\nisolate = true\n",
        )
        .unwrap();
        let settings = RunSettings::from_toml(&config);

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout(), Some(Duration::from_secs(20)));
        assert!(settings.isolate_checks());
        assert_eq!(RunnerOptions::from_config(&settings).mode, FailureMode::Isolated);
        assert_eq!(settings.hint_command(), DEFAULT_HINT_COMMAND);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let empty_url = RunSettings {
            base_url: " ".to_string(),
            ..RunSettings::default()
        };
        assert!(empty_url.validate().is_err());

        let zero_timeout = RunSettings {
            timeout_seconds: Some(0),
            ..RunSettings::default()
        };
        assert!(zero_timeout.validate().is_err());
    }
}
