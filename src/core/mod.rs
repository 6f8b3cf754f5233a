pub mod checks;
pub mod console;
pub mod runner;

pub use crate::domain::model::{Check, CheckOutcome, CheckStatus, ResponseEnvelope, RunReport, Summary};
pub use crate::domain::ports::{ApiClient, ConfigProvider};
pub use crate::utils::error::Result;
