mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (info by default when RUST_LOG is unset)
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taiko_cli=info,taiko_core=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli_utils::load_config(&args.config, args.songs_dir);

    match args.command {
        Command::Offset { id, format } => commands::offset::run(&config, &id, format),
        Command::Preview { id, format } => commands::preview::run(&config, &id, format),
        Command::Scan { json, generate } => commands::scan::run(&config, json, generate),
    }
}
