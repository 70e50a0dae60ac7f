//! Mobile Storefront CLI - Fetch canonical models from the storefront API.
//!
//! # Usage
//!
//! ```bash
//! # Show the signed-in customer's cart
//! storefront-cli --token "$TOKEN" cart
//!
//! # Log in and print the profile
//! storefront-cli login -e customer@example.com
//!
//! # Browse the catalog
//! storefront-cli products --page 2 --page-size 10
//! ```
//!
//! # Commands
//!
//! - `login` - Exchange email/password for a token and print the profile
//! - `cart`, `cart-summary` - Cart domain
//! - `profile` - Auth domain
//! - `orders`, `order` - Orders domain
//! - `products`, `product` - Products domain

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use mobile_storefront::api::DEFAULT_PAGE_SIZE;

#[derive(Parser)]
#[command(name = "storefront-cli")]
#[command(author, version, about = "Mobile storefront API tools")]
struct Cli {
    /// Customer access token sent as a bearer credential
    #[arg(long, env = "STOREFRONT_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Sentry DSN for error tracking
    #[arg(long, env = "SENTRY_DSN", global = true, hide_env_values = true)]
    sentry_dsn: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the customer profile
    Login {
        /// Customer email address
        #[arg(short, long)]
        email: String,

        /// Customer password
        #[arg(short, long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the current cart
    Cart,
    /// Print the cart totals
    CartSummary,
    /// Print the signed-in customer's profile
    Profile,
    /// List orders
    Orders {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Show one order
    Order {
        /// Order ID
        id: String,
    },
    /// List products
    Products {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: u32,
    },
    /// Show one product
    Product {
        /// Product ID
        id: String,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(dsn: Option<&str>) -> Option<sentry::ClientInitGuard> {
    let dsn = dsn?;

    let guard = sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

/// Install the tracing subscriber.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set.
fn init_tracing(json_logs: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mobile_storefront=info,storefront_cli=info".into());

    let fmt_layer = if json_logs {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact()
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Sentry must be initialized before the tracing subscriber
    let _sentry_guard = init_sentry(cli.sentry_dsn.as_deref());
    init_tracing(cli.json_logs);

    if let Err(e) = commands::run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}
