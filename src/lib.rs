pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpApiClient;
pub use config::RunSettings;
pub use core::checks::default_checks;
pub use core::console::Console;
pub use core::runner::{FailureMode, RunnerOptions, SmokeRunner};
pub use utils::error::{Result, SmokeError};
