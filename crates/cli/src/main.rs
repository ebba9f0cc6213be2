//! Pocket Shop CLI - terminal storefront and catalog tools.
//!
//! # Usage
//!
//! ```bash
//! # Open the storefront with the built-in catalog
//! pocket-shop run
//!
//! # Open the storefront with a catalog file
//! pocket-shop run --catalog catalog.yaml
//!
//! # Validate a catalog file
//! pocket-shop catalog check catalog.yaml
//!
//! # List the configured catalog
//! pocket-shop catalog list
//! ```
//!
//! # Environment Variables
//!
//! - `SHOP_CATALOG_PATH` - catalog file used when `--catalog` is not given
//! - `SHOP_CURRENCY_SYMBOL` - price prefix (default `₱`)
//! - `SHOP_TITLE` - product list heading (default `Product List`)
//! - `RUST_LOG` - log filter; logs are written to stderr

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

const DEFAULT_LOG_FILTER: &str = "pocket_shop_storefront=info,pocket_shop_cli=info";

#[derive(Parser)]
#[command(name = "pocket-shop")]
#[command(author, version, about = "Pocket Shop terminal storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive storefront
    Run {
        /// Catalog file (.yaml, .yml or .json); overrides `SHOP_CATALOG_PATH`
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
    /// Inspect catalog files
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Validate a catalog file and report every problem
    Check {
        /// Catalog file to validate
        file: PathBuf,
    },
    /// List the products of the configured catalog
    List {
        /// Catalog file (.yaml, .yml or .json); overrides `SHOP_CATALOG_PATH`
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so screens on stdout stay readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Run { catalog } => commands::shop::run(catalog).await?,
        Commands::Catalog { action } => match action {
            CatalogAction::Check { file } => commands::catalog::check(&file).await?,
            CatalogAction::List { catalog } => commands::catalog::list(catalog).await?,
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_catalog_override() {
        let cli = Cli::try_parse_from(["pocket-shop", "run", "--catalog", "shop.yaml"]);
        assert!(matches!(
            cli.map(|c| c.command),
            Ok(Commands::Run { catalog: Some(path) }) if path == PathBuf::from("shop.yaml")
        ));
    }
}
