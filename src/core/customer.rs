use crate::core::mapper::{map_customer, map_customer_list};
use crate::core::query::dynamic_param;
use crate::core::{Customer, Dispatcher, HttpMethod, NewCustomer, QueryOptions, RequestSpec};
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{check_parameter, validate_non_empty_string, Validate};
use serde_json::{json, Map, Value};

/// The `/customers` resource.
///
/// Holds no state besides its dispatcher; every method performs at most one
/// request and returns the first error it meets without recovering from it.
#[derive(Debug, Clone)]
pub struct CustomerResource<D: Dispatcher> {
    dispatcher: D,
}

impl<D: Dispatcher> CustomerResource<D> {
    pub fn new(dispatcher: D) -> Self {
        Self { dispatcher }
    }

    /// Creates a customer from untyped data.
    ///
    /// All of [`NewCustomer::REQUIRED_FIELDS`] must be present and non-null;
    /// the first missing one is reported before any request is made. The map
    /// is sent as-is, so keys beyond the required ones reach the server.
    pub async fn create_customer(&self, data: &Map<String, Value>) -> Result<Customer> {
        check_parameter(&NewCustomer::REQUIRED_FIELDS, data)?;

        let body = Value::Object(data.clone());
        serde_json::from_value::<NewCustomer>(body.clone()).map_err(|e| {
            ClientError::InvalidParameter {
                field: "data".to_string(),
                value: body.to_string(),
                reason: e.to_string(),
            }
        })?;

        self.post_customer(body).await
    }

    pub async fn create(&self, input: &NewCustomer) -> Result<Customer> {
        let body = serde_json::to_value(input).map_err(|e| ClientError::InvalidParameter {
            field: "data".to_string(),
            value: format!("{:?}", input),
            reason: e.to_string(),
        })?;

        self.post_customer(body).await
    }

    async fn post_customer(&self, body: Value) -> Result<Customer> {
        let request = RequestSpec::new(HttpMethod::Post, "/customers").with_body(body);
        let response = self.dispatcher.send_request(request).await?;
        map_customer(response)
    }

    pub async fn list_customers(&self, options: &QueryOptions) -> Result<Vec<Customer>> {
        options.validate()?;

        let query = dynamic_param(options.to_params());
        let path = if query.is_empty() {
            "/customers/".to_string()
        } else {
            format!("/customers/?{}", query)
        };

        let response = self
            .dispatcher
            .send_request(RequestSpec::new(HttpMethod::Get, path))
            .await?;
        let customers = map_customer_list(response)?;
        tracing::debug!("Listed {} customers", customers.len());
        Ok(customers)
    }

    /// `customer_id` is inserted into the path unescaped.
    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        validate_non_empty_string("customerId", customer_id)?;

        let request = RequestSpec::new(HttpMethod::Get, format!("/customers/{}", customer_id));
        let response = self.dispatcher.send_request(request).await?;
        map_customer(response)
    }

    pub async fn get_customer_by_email(&self, email: &str) -> Result<Customer> {
        validate_non_empty_string("email", email)?;

        let request = RequestSpec::new(HttpMethod::Post, "/customers/fetch_customer")
            .with_body(json!({ "email": email }));
        let response = self.dispatcher.send_request(request).await?;
        map_customer(response)
    }

    /// Updates a customer and returns the server's response body unmapped.
    ///
    /// Unlike the other methods the raw body is returned as-is; use
    /// [`update_customer_mapped`](Self::update_customer_mapped) for a
    /// [`Customer`]. `customer_id` is inserted into the path unescaped.
    pub async fn update_customer(&self, customer_id: &str, data: &Map<String, Value>) -> Result<Value> {
        validate_non_empty_string("customerId", customer_id)?;

        let request = RequestSpec::new(HttpMethod::Put, format!("/customers/{}", customer_id))
            .with_body(Value::Object(data.clone()));
        self.dispatcher.send_request(request).await
    }

    pub async fn update_customer_mapped(
        &self,
        customer_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Customer> {
        let response = self.update_customer(customer_id, data).await?;
        map_customer(response)
    }
}

impl Validate for QueryOptions {
    fn validate(&self) -> Result<()> {
        if let Some(page) = self.page {
            crate::utils::validation::validate_positive_number("page", page, 1)?;
        }
        if let Some(take) = self.take {
            crate::utils::validation::validate_range("take", take, 0, 100)?;
        }
        Ok(())
    }
}
