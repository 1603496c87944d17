use crate::core::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// File-based client configuration.
///
/// ```toml
/// [client]
/// base_url = "https://api.example.com/v1"
/// timeout_seconds = 30
///
/// [client.headers]
/// Authorization = "Bearer ${CUSTOMER_API_KEY}"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub client: ClientSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSection {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ClientError::Config {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of the environment variable.
    /// Unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClientError::Config {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        &self.client.base_url
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.client.headers
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.client.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        crate::utils::validation::validate_url("client.base_url", &self.client.base_url)?;

        if let Some(timeout) = self.client.timeout_seconds {
            if timeout == 0 {
                return Err(ClientError::Config {
                    field: "client.timeout_seconds".to_string(),
                    message: "timeout must be at least 1 second".to_string(),
                });
            }
        }

        for (name, value) in &self.client.headers {
            if value.contains("${") {
                tracing::warn!("Header '{}' still contains an unresolved placeholder", name);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "https://api.example.com"
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "https://api.example.com");
        assert!(config.headers().is_empty());
        assert_eq!(config.timeout_seconds(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_vars_are_substituted() {
        std::env::set_var("CUSTOMER_CLIENT_TEST_TOKEN", "s3cret");
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "https://api.example.com"
timeout_seconds = 10

[client.headers]
Authorization = "Bearer ${CUSTOMER_CLIENT_TEST_TOKEN}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.headers().get("Authorization").map(String::as_str),
            Some("Bearer s3cret")
        );
        assert_eq!(config.timeout_seconds(), Some(10));
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "https://api.example.com"

[client.headers]
X-Api-Key = "${CUSTOMER_CLIENT_TEST_DEFINITELY_UNSET}"
"#,
        )
        .unwrap();

        assert_eq!(
            config.headers().get("X-Api-Key").map(String::as_str),
            Some("${CUSTOMER_CLIENT_TEST_DEFINITELY_UNSET}")
        );
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[client\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ClientError::Config { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "ftp://api.example.com"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[client]
base_url = "https://api.example.com"
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ClientError::Config { .. })));
    }
}
