use crate::config::toml_config::TomlConfig;
use crate::config::{ClientSettings, DEFAULT_BASE_URL};
use crate::core::{NewCustomer, Order, QueryOptions};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-client")]
#[command(about = "Command-line client for the customer API")]
pub struct CliConfig {
    /// Base URL of the customer API. Overrides the config file.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Extra request header, repeatable.
    #[arg(long = "header", value_name = "NAME=VALUE", value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// TOML file with a [client] section.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a customer.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        country_code: String,
    },
    /// List customers.
    List {
        #[arg(long)]
        order: Option<Order>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        take: Option<u32>,
    },
    /// Fetch one customer by id.
    Get { customer_id: String },
    /// Fetch one customer by email.
    GetByEmail { email: String },
    /// Update a customer with a JSON object of changed fields.
    Update {
        customer_id: String,
        #[arg(long)]
        data: String,
    },
}

impl Command {
    pub fn new_customer(&self) -> Option<NewCustomer> {
        match self {
            Command::Create {
                email,
                first_name,
                last_name,
                phone,
                country_code,
            } => Some(NewCustomer {
                email: email.clone(),
                first_name: first_name.clone(),
                last_name: last_name.clone(),
                phone: phone.clone(),
                country_code: country_code.clone(),
            }),
            _ => None,
        }
    }

    pub fn query_options(&self) -> Option<QueryOptions> {
        match self {
            Command::List { order, page, take } => Some(QueryOptions {
                order: *order,
                page: *page,
                take: *take,
            }),
            _ => None,
        }
    }
}

impl CliConfig {
    /// Loads the config file if one was given, then applies CLI overrides.
    pub fn settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                let file_config = TomlConfig::from_file(path)?;
                file_config.validate()?;
                ClientSettings::from_provider(&file_config)
            }
            None => ClientSettings::new(DEFAULT_BASE_URL),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        for (name, value) in &self.headers {
            settings.headers.insert(name.clone(), value.clone());
        }
        if let Some(timeout) = self.timeout_seconds {
            settings.timeout_seconds = Some(timeout);
        }

        Ok(settings)
    }
}

fn parse_header(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected NAME=VALUE, got '{}'", raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        assert_eq!(
            parse_header("Authorization=Bearer a=b"),
            Ok(("Authorization".to_string(), "Bearer a=b".to_string()))
        );
        assert!(parse_header("no-separator").is_err());
        assert!(parse_header("=value").is_err());
    }

    #[test]
    fn test_list_subcommand() {
        let cli = CliConfig::try_parse_from([
            "customer-client",
            "list",
            "--order",
            "desc",
            "--take",
            "5",
        ])
        .unwrap();

        let options = cli.command.query_options().unwrap();
        assert_eq!(options.order, Some(Order::Desc));
        assert_eq!(options.page, None);
        assert_eq!(options.take, Some(5));
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::try_parse_from([
            "customer-client",
            "--base-url",
            "https://api.example.com",
            "--header",
            "Authorization=Bearer t",
            "--timeout-seconds",
            "3",
            "get",
            "cus_1",
        ])
        .unwrap();

        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "https://api.example.com");
        assert_eq!(
            settings.headers.get("Authorization").map(String::as_str),
            Some("Bearer t")
        );
        assert_eq!(settings.timeout_seconds, Some(3));
        assert!(matches!(cli.command, Command::Get { ref customer_id } if customer_id == "cus_1"));
    }

    #[test]
    fn test_config_file_is_validated() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            "[client]\nbase_url = \"https://api.example.com\"\ntimeout_seconds = 0\n",
        )
        .unwrap();
        let path = config_path.to_str().unwrap();

        let cli = CliConfig::try_parse_from(["customer-client", "--config", path, "get", "cus_1"])
            .unwrap();
        let err = cli.settings().unwrap_err();
        assert!(matches!(
            err,
            crate::utils::error::ClientError::Config { ref field, .. } if field == "client.timeout_seconds"
        ));
    }

    #[test]
    fn test_config_file_values_are_loaded() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("client.toml");
        std::fs::write(
            &config_path,
            "[client]\nbase_url = \"https://file.example.com\"\n\n[client.headers]\nX-Api-Key = \"k\"\n",
        )
        .unwrap();
        let path = config_path.to_str().unwrap();

        let cli = CliConfig::try_parse_from(["customer-client", "--config", path, "list"]).unwrap();
        let settings = cli.settings().unwrap();
        assert_eq!(settings.base_url, "https://file.example.com");
        assert_eq!(settings.headers.get("X-Api-Key").map(String::as_str), Some("k"));
    }

    #[test]
    fn test_create_subcommand_builds_new_customer() {
        let cli = CliConfig::try_parse_from([
            "customer-client",
            "create",
            "--email",
            "a@b.com",
            "--first-name",
            "A",
            "--last-name",
            "B",
            "--phone",
            "911",
            "--country-code",
            "+1",
        ])
        .unwrap();

        let input = cli.command.new_customer().unwrap();
        assert_eq!(input.email, "a@b.com");
        assert_eq!(input.country_code, "+1");
    }
}
