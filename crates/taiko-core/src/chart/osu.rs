//! Sectioned chart format (`.osu`).
//!
//! The preview point is `PreviewTime` in the `[General]` section, already in
//! milliseconds. osu! writes `-1` when no preview point is set.

use tracing::warn;

use super::PreviewOffset;
use super::document::ChartDocument;
use crate::error::{Error, Result};

const GENERAL_SECTION: &str = "General";
const PREVIEW_TIME_KEY: &str = "PreviewTime";

pub fn preview_offset(doc: &ChartDocument) -> PreviewOffset {
    let value = doc.get_or(GENERAL_SECTION, PREVIEW_TIME_KEY, "0");
    match parse_preview_time(value) {
        Ok(offset) => offset,
        Err(e) => {
            warn!("Ignoring malformed chart value: {}", e);
            PreviewOffset::ZERO
        }
    }
}

/// Parses a `PreviewTime` value. Negative times clamp to zero.
pub fn parse_preview_time(value: &str) -> Result<PreviewOffset> {
    let millis: i64 = value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidPreviewTime(value.to_string()))?;
    Ok(PreviewOffset::from_millis(millis.max(0) as u64))
}
