use crate::core::{ConfigProvider, Dispatcher, HttpMethod, RequestSpec};
use crate::utils::error::{ClientError, RequestFailure, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method};
use std::time::Duration;

/// `Dispatcher` backed by a `reqwest` client.
///
/// Paths in `RequestSpec` are appended to `base_url`. Default headers (for
/// example an `Authorization` header) and the request timeout come from the
/// `ConfigProvider` the dispatcher was built from.
#[derive(Debug, Clone)]
pub struct HttpDispatcher {
    client: Client,
    base_url: String,
}

impl HttpDispatcher {
    pub fn new(base_url: &str) -> Result<Self> {
        validate_url("base_url", base_url)?;
        Ok(Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        validate_url("base_url", config.base_url())?;

        let mut headers = HeaderMap::new();
        for (key, value) in config.headers() {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| ClientError::Config {
                field: format!("headers.{}", key),
                message: e.to_string(),
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| ClientError::Config {
                field: format!("headers.{}", key),
                message: e.to_string(),
            })?;
            headers.insert(name, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let client = builder.build().map_err(|e| ClientError::Config {
            field: "http_client".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl Dispatcher for HttpDispatcher {
    async fn send_request(&self, request: RequestSpec) -> Result<serde_json::Value> {
        let url = self.url_for(&request.path);
        tracing::debug!("📡 {} {}", request.method, url);

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(RequestFailure::Transport)?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let text = response.text().await.map_err(RequestFailure::Transport)?;

        if !status.is_success() {
            tracing::warn!("{} {} failed with status {}", request.method, url, status);
            return Err(RequestFailure::Status {
                status: status.as_u16(),
                body: text,
            }
            .into());
        }

        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }

        serde_json::from_str(&text).map_err(|e| {
            ClientError::malformed(format!("response body is not valid JSON: {}", e))
        })
    }
}
