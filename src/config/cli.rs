use crate::config::settings::RunSettings;
use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "search-smoke")]
#[command(about = "Smoke test for the service marketplace search API")]
pub struct CliConfig {
    /// API base URL [default: http://localhost:5000/api]
    #[arg(long)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds (no timeout when unset)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Keep running the remaining checks after a failure
    #[arg(long)]
    pub isolate: bool,

    /// Exit with status 1 when any check fails
    #[arg(long)]
    pub fail_exit_code: bool,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve(&self) -> Result<RunSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                RunSettings::from_toml(&TomlConfig::from_file(path)?)
            }
            None => RunSettings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_secs {
            settings.timeout_seconds = Some(timeout);
        }
        if self.isolate {
            settings.isolate = true;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_flags_gives_defaults() {
        let cli = CliConfig::parse_from(["search-smoke"]);
        assert_eq!(cli.resolve().unwrap(), RunSettings::default());
        assert!(!cli.fail_exit_code);
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"[target]\nbase_url = \"http://from-file/api\"\ntimeout_seconds = 5\n[run]\nsuite_name = \"File Suite\"\n",
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "search-smoke",
            "--config",
            path.as_str(),
            "--base-url",
            "http://from-flag/api",
            "--isolate",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.base_url, "http://from-flag/api");
        assert_eq!(settings.timeout_seconds, Some(5));
        assert_eq!(settings.suite_name, "File Suite");
        assert!(settings.isolate);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = CliConfig::parse_from(["search-smoke", "-c", "/nonexistent/smoke.toml"]);
        assert!(cli.resolve().is_err());
    }
}
