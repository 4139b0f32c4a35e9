//! CLI argument definitions for taiko.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use taiko_core::ChartFormat;

#[derive(Parser)]
#[command(name = "taiko")]
#[command(about = "Song preview tool for a taiko song library", version)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// Songs directory (overrides the config file)
    #[arg(long, env = "TAIKO_SONGS_DIR", value_name = "DIR")]
    pub songs_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a song's preview offset in milliseconds
    Offset {
        /// Song id
        id: String,
        /// Chart format of the song (tja or osu)
        #[arg(short, long, default_value = "osu")]
        format: ChartFormat,
    },
    /// Generate preview.mp3 for a song unless it already exists
    Preview {
        /// Song id
        id: String,
        /// Chart format of the song (tja or osu)
        #[arg(short, long, default_value = "osu")]
        format: ChartFormat,
    },
    /// List every song with its detected chart format and preview offset
    Scan {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Also generate missing previews
        #[arg(long)]
        generate: bool,
    },
}
