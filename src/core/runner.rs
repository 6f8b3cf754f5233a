use crate::core::console::Console;
use crate::domain::model::{Check, CheckOutcome, CheckStatus, RunReport, Summary};
use crate::domain::ports::{ApiClient, ConfigProvider};
use crate::utils::error::{Result, SmokeError};
use chrono::Utc;
use std::io::Write;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// The first failing check aborts the rest of the run.
    #[default]
    FailFast,
    /// Every check runs; failures are reported per check and tallied at the end.
    Isolated,
}

#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub suite_name: String,
    pub hint_command: String,
    pub mode: FailureMode,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            suite_name: "HomeXPros Search API".to_string(),
            hint_command: "cd server && npm run dev".to_string(),
            mode: FailureMode::FailFast,
        }
    }
}

impl RunnerOptions {
    pub fn from_config<P: ConfigProvider + ?Sized>(config: &P) -> Self {
        Self {
            suite_name: config.suite_name().to_string(),
            hint_command: config.hint_command().to_string(),
            mode: if config.isolate_checks() {
                FailureMode::Isolated
            } else {
                FailureMode::FailFast
            },
        }
    }
}

/// Executes checks one at a time, in order, against a single client.
pub struct SmokeRunner<C: ApiClient> {
    client: C,
    checks: Vec<Check>,
    options: RunnerOptions,
}

impl<C: ApiClient> SmokeRunner<C> {
    pub fn new(client: C, checks: Vec<Check>) -> Self {
        Self {
            client,
            checks,
            options: RunnerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunnerOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the checks and writes the transcript. Only console write failures
    /// are returned as errors; check failures end up in the report.
    pub async fn run<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> Result<RunReport> {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut outcomes = Vec::with_capacity(self.checks.len());

        tracing::info!(
            "Running {} checks ({:?})",
            self.checks.len(),
            self.options.mode
        );

        console.line(&format!("Testing {}...", self.options.suite_name))?;
        console.blank()?;

        for (index, check) in self.checks.iter().enumerate() {
            console.line(&format!("{}. Testing {}", index + 1, check.title))?;

            match self.client.fetch(&check.request).await {
                Ok(envelope) => {
                    let summary = (check.summarize)(&envelope);
                    write_summary(console, &summary)?;
                    console.blank()?;
                    outcomes.push(CheckOutcome {
                        name: check.name.clone(),
                        status: CheckStatus::Passed {
                            count: summary.count,
                        },
                    });
                }
                Err(e) => {
                    tracing::warn!("Check '{}' failed: {}", check.name, e);
                    write_failure(console, &e)?;
                    outcomes.push(CheckOutcome {
                        name: check.name.clone(),
                        status: failed_status(&e),
                    });

                    if self.options.mode == FailureMode::FailFast {
                        outcomes.extend(self.checks[index + 1..].iter().map(|c| CheckOutcome {
                            name: c.name.clone(),
                            status: CheckStatus::Skipped,
                        }));
                        break;
                    }
                    console.blank()?;
                }
            }
        }

        let report = RunReport {
            started_at,
            duration: start.elapsed(),
            outcomes,
        };

        if report.all_passed() {
            console.line("🎉 All API tests completed successfully!")?;
        } else {
            if self.options.mode == FailureMode::Isolated {
                console.error_line(&format!(
                    "❌ {} of {} API tests failed",
                    report.failed(),
                    report.outcomes.len()
                ))?;
            }
            self.write_hint(console)?;
        }
        console.flush()?;

        tracing::info!(
            "Run started at {} finished in {:?}: {} passed, {} failed, {} skipped",
            report.started_at.to_rfc3339(),
            report.duration,
            report.passed(),
            report.failed(),
            report.skipped()
        );

        Ok(report)
    }

    fn write_hint<O: Write, E: Write>(&self, console: &mut Console<O, E>) -> Result<()> {
        console.blank()?;
        console.line("💡 Make sure the backend server is running:")?;
        console.line(&format!("   {}", self.options.hint_command))
    }
}

fn write_summary<O: Write, E: Write>(console: &mut Console<O, E>, summary: &Summary) -> Result<()> {
    console.line(&format!("✅ {}: {}", summary.headline, summary.count))?;
    for detail in &summary.details {
        console.line(&format!("   {}", detail))?;
    }
    Ok(())
}

fn write_failure<O: Write, E: Write>(console: &mut Console<O, E>, error: &SmokeError) -> Result<()> {
    console.error_line(&format!("❌ API Test failed: {}", error))?;
    if let Some(status) = error.status() {
        console.error_line(&format!("   Status: {}", status))?;
    }
    if let Some(body) = error.response_body() {
        let rendered = match body {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        };
        console.error_line(&format!("   Data: {}", rendered))?;
    }
    Ok(())
}

fn failed_status(error: &SmokeError) -> CheckStatus {
    CheckStatus::Failed {
        message: error.to_string(),
        status: error.status(),
        body: error.response_body().cloned(),
    }
}
