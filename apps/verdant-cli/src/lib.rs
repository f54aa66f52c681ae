//! # Verdant CLI Library
//!
//! The interactive storefront: loads the catalog, owns the cart store and
//! runs the shell on stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! verdant_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── shell.rs        ◄─── Line parsing and the read-eval-print loop
//! ├── view.rs         ◄─── Screen rendering (tables, modal)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore (the single cart writer)
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── product.rs  ◄─── Catalog listing
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── payment.rs  ◄─── Mock checkout
//! └── error.rs        ◄─── ApiError / AppError
//! ```
//!
//! ## State Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shell (owner)                                  │
//! │                                                                         │
//! │  ┌──────────────────┐ ┌──────────────────┐ ┌──────────────────────┐   │
//! │  │    Catalog       │ │    CartStore     │ │    ConfigState       │   │
//! │  │                  │ │                  │ │                      │   │
//! │  │  • Products      │ │  • CartState     │ │  • Store name        │   │
//! │  │  • Read-only     │ │  • &mut dispatch │ │  • Currency symbol   │   │
//! │  │                  │ │                  │ │  • Clear on payment  │   │
//! │  └──────────────────┘ └──────────────────┘ └──────────────────────┘   │
//! │                                                                         │
//! │  One store per shell. Handlers borrow only what they need.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;
pub mod view;

use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;
use verdant_core::Catalog;

use error::AppError;
use shell::Shell;
use state::ConfigState;

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../assets/catalog.json");

const DEFAULT_LOG_FILTER: &str = "info,verdant=debug";

#[derive(Debug, Parser)]
#[command(name = "verdant", about = "Verdant Garden Shop", long_about = None)]
pub struct Args {
    /// Catalog JSON file (overrides VERDANT_CATALOG and the bundled catalog)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,
}

/// Runs the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,verdant=debug; RUST_LOG or --log-filter override    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • VERDANT_* environment variables over defaults                     │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • --catalog, then VERDANT_CATALOG, then the bundled file            │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • stdin ► commands ► stdout until `quit` or end of input            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: Args) -> Result<(), AppError> {
    init_tracing(args.log_filter.as_deref());

    info!("Starting Verdant Garden Shop");

    let mut config = ConfigState::from_env();
    if let Some(path) = args.catalog {
        config.catalog_path = Some(path);
    }

    let catalog = load_catalog(&config)?;
    info!(products = catalog.len(), "Catalog loaded");

    let mut shell = Shell::new(catalog, config);
    shell.run(io::stdin().lock(), io::stdout().lock())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `--log-filter debug` or `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=verdant=trace` - Show trace for verdant crates only
/// - Default: INFO, DEBUG for verdant
///
/// Logs go to stderr so they never interleave with shell screens.
fn init_tracing(directive: Option<&str>) {
    let filter = directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads the configured catalog file, or the bundled one.
pub fn load_catalog(config: &ConfigState) -> Result<Catalog, AppError> {
    match &config.catalog_path {
        Some(path) => {
            info!(?path, "Reading catalog file");
            let json = std::fs::read_to_string(path).map_err(|source| AppError::CatalogRead {
                path: path.clone(),
                source,
            })?;
            Ok(Catalog::from_json(&json)?)
        }
        None => Ok(Catalog::from_json(BUNDLED_CATALOG)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_core::{Money, ProductId};

    #[test]
    fn test_bundled_catalog() {
        let catalog = load_catalog(&ConfigState::default()).unwrap();

        assert_eq!(catalog.len(), 6);
        let trowel = catalog.require(ProductId(1)).unwrap();
        assert_eq!(trowel.name, "Hand Trowel");
        assert_eq!(trowel.price, Money::from_cents(1000));
        assert_eq!(
            catalog.require(ProductId(3)).unwrap().price,
            Money::from_cents(2499)
        );
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ConfigState {
            catalog_path: Some(PathBuf::from("/nonexistent/verdant/catalog.json")),
            ..ConfigState::default()
        };

        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, AppError::CatalogRead { .. }));
        assert!(err.to_string().contains("/nonexistent/verdant/catalog.json"));
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(["verdant", "--catalog", "shop.json", "--log-filter", "warn"]);
        assert_eq!(args.catalog, Some(PathBuf::from("shop.json")));
        assert_eq!(args.log_filter.as_deref(), Some("warn"));

        let args = Args::parse_from(["verdant"]);
        assert!(args.catalog.is_none());
        assert!(args.log_filter.is_none());
    }
}
