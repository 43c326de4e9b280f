//! # homebox-cli
//!
//! A command-line client for a Homebox-style home-inventory REST API.
//! It authenticates, then creates/renames locations, bulk-imports
//! locations, and exports/updates inventory items via CSV files.
//!
//! ## Usage
//!
//! **Create a location:**
//! ```sh
//! homebox-cli --base-url http://localhost:3100/api/v1 \
//!     --username user@example.com --password secret \
//!     create-location --name Shelf --parent Garage
//! ```
//!
//! **Export items:**
//! ```sh
//! homebox-cli --base-url ... --username ... --password ... \
//!     export-items --csv items.csv
//! ```
//!
//! Credentials can also come from the `HOMEBOX_URL`, `HOMEBOX_USERNAME`,
//! and `HOMEBOX_PASSWORD` environment variables. All mutating commands
//! accept `--dry-run` to log intended actions without performing them.
//!
//! See `homebox-cli --help` for the full option list.

use anyhow::Result;
use clap::Parser as _;
use homebox_cli::cli::Args;
use homebox_cli::error::HomeboxError;
use tracing::error;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing subscriber based on verbose flag
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_target(false).with_env_filter(filter).init();

    match homebox_cli::run(args) {
        Ok(()) => Ok(()),
        Err(err) => {
            error!("{}", err);
            std::process::exit(
                err.downcast_ref::<HomeboxError>()
                    .map_or(1, HomeboxError::exit_code),
            );
        }
    }
}
