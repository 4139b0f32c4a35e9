//! Scan command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use taiko_core::{ChartFormat, Config, PreviewOffset, PreviewOutcome, SongId};
use tracing::{info, warn};

use crate::cli_utils;

#[derive(Debug, Serialize)]
struct SongEntry {
    id: SongId,
    #[serde(rename = "type")]
    format: Option<ChartFormat>,
    preview: PreviewOffset,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'static str>,
}

/// List every song in the library, optionally generating missing previews
pub fn run(config: &Config, json: bool, generate: bool) -> Result<()> {
    let generator = cli_utils::build_generator(config);
    let resolver = generator.resolver();

    let ids = resolver
        .song_ids()
        .with_context(|| format!("Failed to list {}", resolver.songs_dir().display()))?;
    info!("Found {} songs in {:?}", ids.len(), resolver.songs_dir());

    let mut entries = Vec::with_capacity(ids.len());
    let mut failed = 0usize;

    for id in ids {
        let format = resolver.detect_format(&id);
        let preview = match format {
            Some(format) => resolver.resolve_offset(&id, format).unwrap_or_else(|e| {
                warn!("Failed to read chart for song #{}: {}", id, e);
                PreviewOffset::ZERO
            }),
            None => PreviewOffset::ZERO,
        };

        let status = match format {
            Some(format) if generate => match generator.generate(&id, preview) {
                Ok(outcome) => Some(outcome_label(&outcome)),
                Err(e) => {
                    warn!("Failed to make preview for song #{} ({}): {}", id, format, e);
                    failed += 1;
                    Some("failed")
                }
            },
            _ => None,
        };

        entries.push(SongEntry {
            id,
            format,
            preview,
            status,
        });
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let format: &str = entry.format.map(Into::into).unwrap_or("-");
            match entry.status {
                Some(status) => println!(
                    "{}\t{}\t{}\t{}",
                    entry.id,
                    format,
                    entry.preview.as_millis(),
                    status
                ),
                None => println!("{}\t{}\t{}", entry.id, format, entry.preview.as_millis()),
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} previews failed", failed, entries.len());
    }
    Ok(())
}

fn outcome_label(outcome: &PreviewOutcome) -> &'static str {
    match outcome {
        PreviewOutcome::Created(_) => "created",
        PreviewOutcome::Existing(_) => "exists",
        PreviewOutcome::NoSourceAudio => "no-audio",
        PreviewOutcome::NoPreviewOffset => "no-preview",
    }
}
