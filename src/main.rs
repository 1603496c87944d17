use clap::Parser;
use customer_client::config::cli::Command;
use customer_client::utils::error::ErrorCategory;
use customer_client::utils::logger::{self, LogFormat};
use customer_client::utils::validation::Validate;
use customer_client::{CliConfig, ClientError, CustomerResource, HttpDispatcher};
use serde_json::Value;

async fn run(config: &CliConfig) -> Result<Value, ClientError> {
    let settings = config.settings()?;
    settings.validate()?;
    tracing::debug!("Client settings: base_url={}", settings.base_url);

    let customers = CustomerResource::new(HttpDispatcher::from_config(&settings)?);

    let output = match &config.command {
        Command::Create { .. } => {
            let input = config
                .command
                .new_customer()
                .ok_or_else(|| ClientError::missing("data"))?;
            to_json(&customers.create(&input).await?)?
        }
        Command::List { .. } => {
            let options = config.command.query_options().unwrap_or_default();
            to_json(&customers.list_customers(&options).await?)?
        }
        Command::Get { customer_id } => to_json(&customers.get_customer(customer_id).await?)?,
        Command::GetByEmail { email } => {
            to_json(&customers.get_customer_by_email(email).await?)?
        }
        Command::Update { customer_id, data } => {
            let data = match serde_json::from_str::<Value>(data) {
                Ok(Value::Object(map)) => map,
                _ => {
                    return Err(ClientError::InvalidParameter {
                        field: "data".to_string(),
                        value: data.clone(),
                        reason: "expected a JSON object".to_string(),
                    })
                }
            };
            customers.update_customer(customer_id, &data).await?
        }
    };

    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ClientError> {
    serde_json::to_value(value).map_err(|e| ClientError::malformed(e.to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::info!("Starting customer-client");

    match run(&config).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Request failed: {} (Category: {:?})", e, e.category());
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.category() {
                ErrorCategory::Input | ErrorCategory::Configuration => 2,
                ErrorCategory::Remote => 3,
                ErrorCategory::Transport | ErrorCategory::Response => 4,
            };
            std::process::exit(exit_code);
        }
    }
}
