//! Offset command implementation.

use anyhow::{Context, Result};
use taiko_core::{ChartFormat, Config, PreviewResolver, SongId};

/// Print the preview offset of one song
pub fn run(config: &Config, id: &str, format: ChartFormat) -> Result<()> {
    let id: SongId = id.parse()?;
    let resolver = PreviewResolver::new(config);

    let offset = resolver
        .resolve_offset(&id, format)
        .with_context(|| format!("Failed to read {} chart for song #{}", format, id))?;

    println!("{}", offset.as_millis());
    Ok(())
}
