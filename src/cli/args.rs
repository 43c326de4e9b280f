use crate::api::Connection;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments for homebox-cli
#[derive(Parser, Debug, Clone)]
#[command(name = "homebox-cli")]
#[command(about = "A CLI client for the Homebox inventory API")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Base API URL, e.g. http://localhost:3100/api/v1
    #[arg(long, value_name = "URL", env = "HOMEBOX_URL")]
    pub base_url: String,

    /// Username (email) to authenticate with
    #[arg(long, value_name = "USER", env = "HOMEBOX_USERNAME")]
    pub username: String,

    /// Password to authenticate with
    #[arg(long, value_name = "PASS", env = "HOMEBOX_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Preview mutations without executing them
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Connection parameters extracted from the global arguments
    #[must_use]
    pub fn connection(&self) -> Connection {
        Connection {
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

/// Subcommands of homebox-cli
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create a single location, optionally under a parent
    CreateLocation {
        /// Location name
        #[arg(long)]
        name: String,

        /// Optional location description
        #[arg(long, default_value = "")]
        description: String,

        /// Parent location name
        #[arg(long)]
        parent: Option<String>,
    },

    /// Create locations in bulk from a CSV file (name,description,parent)
    ImportLocations {
        /// Path to the CSV file to read
        #[arg(long, value_name = "PATH")]
        csv: PathBuf,
    },

    /// Rename the location identified by a slash-delimited path
    RenameLocation {
        /// Path of the location to rename, e.g. Garage/Shelf
        #[arg(long, value_name = "PATH")]
        path: String,

        /// New location name
        #[arg(long)]
        name: String,
    },

    /// Export all items to a CSV file (id,name,description,quantity,locationPath,tags)
    ExportItems {
        /// Path to the CSV file to write
        #[arg(long, value_name = "PATH")]
        csv: PathBuf,
    },

    /// Update items in bulk from a CSV file; missing tags are created on demand
    UpdateItems {
        /// Path to the CSV file to read
        #[arg(long, value_name = "PATH")]
        csv: PathBuf,
    },
}
