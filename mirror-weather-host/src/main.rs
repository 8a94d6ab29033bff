//! Standalone host for the mirror weather widget.
//!
//! This binary focuses on:
//! - Parsing CLI arguments
//! - Loading the widget configuration
//! - Providing a file-backed mount point a kiosk browser can display

use clap::Parser;

mod cli;
mod mount;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
