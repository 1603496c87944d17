use crate::utils::error::{ClientError, Result};
use serde_json::{Map, Value};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks that every key in `required_keys` is present in `data` with a
/// non-null value. Reports the first missing key in `required_keys` order.
pub fn check_parameter(required_keys: &[&str], data: &Map<String, Value>) -> Result<()> {
    for key in required_keys {
        match data.get(*key) {
            None | Some(Value::Null) => return Err(ClientError::missing(key)),
            Some(_) => {}
        }
    }
    Ok(())
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty".to_string()));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(field_name, url_str, format!("Invalid URL format: {}", e))),
    }
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::missing(field_name));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

fn invalid(field_name: &str, value: &str, reason: String) -> ClientError {
    ClientError::InvalidParameter {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    }
}
