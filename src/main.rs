use clap::Parser;
use search_smoke::domain::ports::ConfigProvider;
use search_smoke::utils::{logger, validation::Validate};
use search_smoke::{default_checks, CliConfig, Console, HttpApiClient, RunnerOptions, SmokeRunner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match cli.resolve().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!("Target API: {}", settings.base_url());

    let client = HttpApiClient::with_timeout(settings.base_url(), settings.timeout())?;
    let runner = SmokeRunner::new(client, default_checks())
        .with_options(RunnerOptions::from_config(&settings));

    let mut console = Console::stdio();
    let report = runner.run(&mut console).await?;

    // 預設無論結果都以 0 結束，除非指定 --fail-exit-code
    if cli.fail_exit_code && !report.all_passed() {
        std::process::exit(1);
    }

    Ok(())
}
