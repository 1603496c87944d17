pub mod customer;
pub mod dispatcher;
pub mod mapper;
pub mod query;

pub use crate::domain::model::{
    Customer, CustomerId, HttpMethod, NewCustomer, Order, QueryOptions, RawCustomerRecord,
    RequestSpec,
};
pub use crate::domain::ports::{ConfigProvider, Dispatcher};
pub use crate::utils::error::Result;
