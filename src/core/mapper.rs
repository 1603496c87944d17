use crate::domain::model::{Customer, RawCustomerRecord};
use crate::utils::error::{ClientError, Result};
use serde_json::Value;

/// Parses one JSON value into a raw customer record.
pub fn parse_record(value: Value) -> Result<RawCustomerRecord> {
    if !value.is_object() {
        return Err(ClientError::malformed(format!(
            "expected a customer object, got {}",
            json_kind(&value)
        )));
    }
    serde_json::from_value(value)
        .map_err(|e| ClientError::malformed(format!("invalid customer record: {}", e)))
}

pub fn to_domain_object(raw: RawCustomerRecord) -> Customer {
    Customer {
        id: raw.id,
        email: raw.email,
        first_name: raw.first_name,
        last_name: raw.last_name,
        country_code: raw.country_code,
        phone: raw.phone,
    }
}

/// Parses and maps a single customer from a response body.
pub fn map_customer(value: Value) -> Result<Customer> {
    parse_record(value).map(to_domain_object)
}

/// Maps every element of `data.customers` in the order the server sent them.
pub fn map_customer_list(mut body: Value) -> Result<Vec<Customer>> {
    let customers = match body.pointer_mut("/data/customers").map(Value::take) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ClientError::malformed(format!(
                "expected data.customers to be an array, got {}",
                json_kind(&other)
            )))
        }
        None => return Err(ClientError::malformed("response has no data.customers field")),
    };

    customers.into_iter().map(map_customer).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
