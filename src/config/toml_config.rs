use crate::utils::error::{Result, SmokeError};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub target: TargetConfig,
    #[serde(default)]
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TargetConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunConfig {
    pub suite_name: Option<String>,
    pub isolate: Option<bool>,
    pub hint_command: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SmokeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SmokeError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_BASE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SmokeError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[target]
base_url = "http://staging.local:8080/api"
timeout_seconds = 15

[run]
suite_name = "Staging Search API"
isolate = true
hint_command = "docker compose up api"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(
            config.target.base_url.as_deref(),
            Some("http://staging.local:8080/api")
        );
        assert_eq!(config.target.timeout_seconds, Some(15));
        assert_eq!(config.run.isolate, Some(true));
        assert_eq!(config.run.hint_command.as_deref(), Some("docker compose up api"));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.target.base_url.is_none());
        assert!(config.run.suite_name.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SEARCH_SMOKE_TEST_BASE", "http://10.0.0.5:5000/api");

        let toml_content = r#"
[target]
base_url = "${SEARCH_SMOKE_TEST_BASE}"

[run]
hint_command = "${SEARCH_SMOKE_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.target.base_url.as_deref(), Some("http://10.0.0.5:5000/api"));
        assert_eq!(
            config.run.hint_command.as_deref(),
            Some("${SEARCH_SMOKE_UNSET_VAR}")
        );

        std::env::remove_var("SEARCH_SMOKE_TEST_BASE");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[target\nbase_url = 1").unwrap_err();
        assert!(matches!(err, SmokeError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[target]\nbase_url = \"http://localhost:5001/api\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.target.base_url.as_deref(), Some("http://localhost:5001/api"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/nonexistent/search-smoke.toml").unwrap_err();
        assert!(matches!(err, SmokeError::IoError(_)));
    }
}
