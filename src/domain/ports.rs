use crate::domain::model::{RequestSpec, ResponseEnvelope};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Performs the request and decodes the body. Non-2xx answers are errors.
    async fn fetch(&self, request: &RequestSpec) -> Result<ResponseEnvelope>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn isolate_checks(&self) -> bool;
    fn suite_name(&self) -> &str;
    fn hint_command(&self) -> &str;
}
