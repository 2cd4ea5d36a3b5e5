//! Main entry point for MyMemory Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mymemory_translator::cli::commands::{self, Commands};
use mymemory_translator::{ClientConfig, MyMemoryClient};

/// MyMemory Translator - translate text through the MyMemory API
#[derive(Parser, Debug)]
#[command(name = "mymemory-translator", version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults to MYMEMORY_* env vars)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum chunk requests in flight
    #[arg(long)]
    max_concurrent: Option<usize>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    let default_filter = format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = match &args.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };

    // Override config with CLI args if provided
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(max_concurrent) = args.max_concurrent {
        config.max_concurrent = max_concurrent;
    }

    let client = MyMemoryClient::new(config)?;

    // Execute command
    match args.command {
        Commands::Translate {
            text,
            options,
            json,
        } => {
            commands::handle_translate(&client, text, options, json).await?;
        }
        Commands::Batch {
            file,
            output,
            options,
        } => {
            commands::handle_batch(&client, file, output, options).await?;
        }
    }

    Ok(())
}
