//! Chart file parsing.
//!
//! Two chart formats are supported:
//! - `tja` - flat header read in a single pass (see [`tja`])
//! - `osu` - `[Section]` blocks with `key: value` lines (see [`osu`])
//!
//! Both reduce to a [`PreviewOffset`].

mod decode;
mod document;
pub mod osu;
pub mod tja;

pub use decode::decode_chart;
pub use document::{ChartDocument, DEFAULT_SECTION};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Chart format tag stored alongside each song.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ChartFormat {
    Tja,
    Osu,
}

impl ChartFormat {
    /// Parse a format tag, e.g. `"tja"` or `"OSU"`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        Self::from_str(tag.trim()).map_err(|_| Error::UnknownChartFormat(tag.to_string()))
    }

    /// Extract the preview offset from raw chart file bytes.
    pub fn preview_offset(self, bytes: &[u8]) -> PreviewOffset {
        match self {
            Self::Tja => tja::preview_offset(&decode_chart(bytes)),
            Self::Osu => osu::preview_offset(&ChartDocument::from_bytes(bytes)),
        }
    }
}

/// Position of the preview clip, in milliseconds from track start.
///
/// Zero means the chart declares no preview point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PreviewOffset(u64);

impl PreviewOffset {
    pub const ZERO: Self = Self(0);

    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Rounds to the nearest millisecond; negative values clamp to zero.
    pub fn from_secs_f64(seconds: f64) -> Self {
        Self((seconds * 1000.0).round().max(0.0) as u64)
    }

    pub const fn as_millis(self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1000.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for PreviewOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
