//! Preview command implementation.

use anyhow::{Context, Result};
use taiko_core::{ChartFormat, Config, PreviewOutcome, SongId};

use crate::cli_utils;

/// Ensure preview.mp3 exists for one song and report what happened
pub fn run(config: &Config, id: &str, format: ChartFormat) -> Result<()> {
    let id: SongId = id.parse()?;
    let generator = cli_utils::build_generator(config);

    let outcome = generator
        .ensure_preview(&id, format)
        .with_context(|| format!("Failed to make preview for song #{}", id))?;

    match outcome {
        PreviewOutcome::Created(path) => println!("Created {}", path.display()),
        PreviewOutcome::Existing(path) => println!("Exists {}", path.display()),
        PreviewOutcome::NoSourceAudio => println!("Song #{} has no source audio", id),
        PreviewOutcome::NoPreviewOffset => {
            println!("Song #{} declares no preview point, use the full track", id)
        }
    }
    Ok(())
}
