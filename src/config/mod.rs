#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use std::collections::HashMap;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resolved transport settings shared by every configuration source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub timeout_seconds: Option<u64>,
}

impl ClientSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            headers: HashMap::new(),
            timeout_seconds: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    pub fn from_provider<C: ConfigProvider>(config: &C) -> Self {
        Self {
            base_url: config.base_url().to_string(),
            headers: config.headers().clone(),
            timeout_seconds: config.timeout_seconds(),
        }
    }
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ConfigProvider for ClientSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if let Some(timeout) = self.timeout_seconds {
            crate::utils::validation::validate_positive_number(
                "timeout_seconds",
                u32::try_from(timeout).unwrap_or(u32::MAX),
                1,
            )?;
        }
        Ok(())
    }
}
