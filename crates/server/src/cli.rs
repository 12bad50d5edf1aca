//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Award-interval report server.
///
/// Loads the awards dataset once and serves the producer interval report.
#[derive(Parser, Debug)]
#[command(name = "awards-server", about = "Producer win-interval report over the awards dataset")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and start the HTTP server (default)
    Serve {
        /// Dataset file (overrides DATASET_PATH)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Load the dataset, print the report as JSON and exit
    Report {
        /// Dataset file (overrides DATASET_PATH)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
    /// Print the OpenAPI document for the HTTP interface
    Openapi,
}

impl CliArgs {
    /// The subcommand to run, `serve` when none was given.
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Serve { dataset: None })
    }
}
