use crate::domain::model::RequestSpec;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Performs exactly one round trip per call and hands back the parsed body.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn send_request(&self, request: RequestSpec) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn headers(&self) -> &HashMap<String, String>;
    fn timeout_seconds(&self) -> Option<u64>;
}
