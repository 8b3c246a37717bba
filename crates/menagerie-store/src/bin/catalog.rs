//! # Catalog Dump
//!
//! Boots a store the way a server process would and prints its contents
//! as JSON.
//!
//! ## Usage
//! ```bash
//! # Dump the seeded catalog
//! cargo run -p menagerie-store --bin catalog
//!
//! # Use a config file
//! cargo run -p menagerie-store --bin catalog -- --config ./menagerie.toml
//!
//! # Only animals and products matching any tag
//! cargo run -p menagerie-store --bin catalog -- --tag dog --tag karma
//! ```
//!
//! Logs go to stderr so stdout stays valid JSON. `RUST_LOG` overrides the
//! configured log filter.

use serde_json::json;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, Subscriber};
use tracing_subscriber::EnvFilter;

use menagerie_store::config::LogSettings;
use menagerie_store::{ConfigError, Store, StoreConfig};

/// What the command line asked for.
#[derive(Debug, PartialEq)]
enum Command {
    Help,
    Dump {
        config_path: Option<PathBuf>,
        tags: Vec<String>,
    },
}

/// Parses arguments after the program name.
fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut config_path: Option<PathBuf> = None;
    let mut tags: Vec<String> = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let value = iter.next().ok_or_else(|| format!("{} requires a path", arg))?;
                config_path = Some(PathBuf::from(value));
            }
            "--tag" | "-t" => {
                let value = iter.next().ok_or_else(|| format!("{} requires a tag", arg))?;
                tags.push(value.clone());
            }
            "--help" | "-h" => return Ok(Command::Help),
            other => return Err(format!("Unknown argument: {}", other)),
        }
    }

    Ok(Command::Dump { config_path, tags })
}

/// Stderr subscriber; `RUST_LOG` wins over `default_filter`.
fn stderr_subscriber(default_filter: &str) -> impl Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish()
}

/// Loads the config with `bootstrap` active, so events emitted while
/// loading are not lost before the configured subscriber exists.
fn load_config<S>(path: Option<&Path>, bootstrap: S) -> Result<StoreConfig, ConfigError>
where
    S: Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::with_default(bootstrap, || StoreConfig::load(path))
}

fn print_help() {
    eprintln!("Menagerie Catalog Dump");
    eprintln!();
    eprintln!("Usage: catalog [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config <PATH>  TOML config file (default: none, built-in defaults)");
    eprintln!("  -t, --tag <TAG>      Filter animals and products by tag (repeatable)");
    eprintln!("  -h, --help           Show this help message");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let (config_path, tags) = match parse_args(&args) {
        Ok(Command::Help) => {
            print_help();
            return Ok(());
        }
        Ok(Command::Dump { config_path, tags }) => (config_path, tags),
        Err(message) => {
            print_help();
            return Err(message.into());
        }
    };

    let bootstrap = stderr_subscriber(&LogSettings::default().filter);
    let config = load_config(config_path.as_deref(), bootstrap)?;
    tracing::subscriber::set_global_default(stderr_subscriber(&config.log.filter))?;

    let store = Store::new(&config)?;

    let animals = store.animals().filter(&tags);
    let products = store.products().filter(&tags);
    info!(
        tags = ?tags,
        animals = animals.len(),
        products = products.len(),
        "Dumping catalog"
    );

    let catalog = json!({
        "animals": animals,
        "products": products,
        "orders": store.orders().list(),
        "users": store.users().list(),
    });

    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
