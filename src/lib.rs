//! homebox-cli - A CLI client for the Homebox inventory API
//!
//! This library authenticates against a Homebox-style REST service and
//! provides subcommands for creating and renaming storage locations,
//! bulk-importing locations, and exporting/updating inventory items via
//! CSV files. Location hierarchies are addressed with slash-delimited
//! paths such as `Garage/Shelf/BinA`.

pub mod api;
pub mod cli;
pub mod error;
pub mod io;
pub mod operations;
pub mod resolve;

use anyhow::Result;
use api::{HomeboxClient, InventoryApi};
use cli::{Args, Command};

/// Main entry point for the homebox-cli library
///
/// Logs in with the connection parameters from `args` and dispatches the
/// subcommand. An authentication failure aborts before any command work.
///
/// # Errors
///
/// Returns an error if login fails or the subcommand fails.
pub fn run(args: Args) -> Result<()> {
    let client = HomeboxClient::login(&args.connection())?;
    dispatch(&client, &args.command, args.dry_run)
}

/// Dispatch a parsed subcommand against any API implementation
///
/// Split out from [`run`] so tests can drive the commands through an
/// in-memory mock instead of a live server.
///
/// # Errors
///
/// Returns an error if the subcommand fails.
pub fn dispatch(api: &dyn InventoryApi, command: &Command, dry_run: bool) -> Result<()> {
    match command {
        Command::CreateLocation {
            name,
            description,
            parent,
        } => operations::create_location::execute(api, name, description, parent.as_deref(), dry_run),
        Command::ImportLocations { csv } => {
            operations::import_locations::execute(api, csv, dry_run)
        }
        Command::RenameLocation { path, name } => {
            operations::rename_location::execute(api, path, name, dry_run)
        }
        Command::ExportItems { csv } => operations::export_items::execute(api, csv, dry_run),
        Command::UpdateItems { csv } => operations::update_items::execute(api, csv, dry_run),
    }
}
