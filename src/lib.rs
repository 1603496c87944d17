pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{toml_config::TomlConfig, ClientSettings};
pub use core::{
    customer::CustomerResource, dispatcher::HttpDispatcher, Customer, CustomerId, Dispatcher,
    HttpMethod, NewCustomer, Order, QueryOptions, RequestSpec,
};
pub use utils::error::{ClientError, RequestFailure, Result};
