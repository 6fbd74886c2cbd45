mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::NetworkConfig;

/// Command line arguments for the subway query tool
#[derive(Parser, Debug)]
#[command(name = "subway")]
#[command(about = "Subway line topology and shortest path queries")]
struct Args {
    /// Path to the network definition JSON file
    #[arg(short, long)]
    network: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Logs go to stderr, stdout carries the JSON result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let content = tokio::fs::read_to_string(&args.network)
        .await
        .with_context(|| {
            format!(
                "Failed to read network file '{}'",
                args.network.display()
            )
        })?;

    let config: NetworkConfig = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse network file '{}'",
            args.network.display()
        )
    })?;

    let network = config.build().with_context(|| {
        format!(
            "Failed to build network from '{}'",
            args.network.display()
        )
    })?;

    tracing::info!(
        "Loaded {} stations and {} lines from {}",
        network.stations().len(),
        network.lines().len(),
        args.network.display()
    );

    let output = commands::run(&network, args.command)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
