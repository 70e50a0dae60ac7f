//! Command implementations.
//!
//! Every command follows the same startup order: load configuration,
//! initialize all registries, authorize them when a token is known, then
//! call one API function and print its canonical model as JSON on stdout.

use std::io::Write;

use secrecy::SecretString;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use mobile_storefront::api;
use mobile_storefront::{ApiClients, ApiConfig, ApiError, ConfigError, RegistryError};

use super::{Cli, Commands};

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Client setup error: {0}")]
    Registry(#[from] RegistryError),
    #[error("API error: {0}")]
    Api(#[from] ApiError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run a parsed command line.
///
/// # Errors
///
/// Returns an error if configuration is missing, a registry cannot be set
/// up, the API call fails, or output cannot be written.
pub(crate) async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ApiConfig::from_env()?;

    let mut clients = ApiClients::new(&config);
    clients.initialize_all()?;

    if let Some(token) = cli.token {
        clients.authorize_all(&SecretString::from(token))?;
        info!("Using provided customer token");
    }

    match cli.command {
        Commands::Login { email, password } => {
            let token =
                api::auth::request_token(&clients.auth, &email, &SecretString::from(password))
                    .await?;
            clients.authorize_all(&token)?;
            info!("Logged in");
            print_json(&api::auth::fetch_profile(&clients.auth).await?)
        }
        Commands::Cart => print_json(&api::cart::fetch_cart(&clients.cart).await?),
        Commands::CartSummary => print_json(&api::cart::fetch_cart_summary(&clients.cart).await?),
        Commands::Profile => print_json(&api::auth::fetch_profile(&clients.auth).await?),
        Commands::Orders { page, page_size } => {
            print_json(&api::orders::fetch_orders(&clients.orders, page, page_size).await?)
        }
        Commands::Order { id } => print_json(&api::orders::fetch_order(&clients.orders, &id).await?),
        Commands::Products { page, page_size } => {
            print_json(&api::products::fetch_products(&clients.products, page, page_size).await?)
        }
        Commands::Product { id } => {
            print_json(&api::products::fetch_product(&clients.products, &id).await?)
        }
    }
}

/// Write a value as pretty JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
