//! Configuration for the song library and the preview transcoder.
//!
//! This module contains:
//! - `Config` - top-level settings, loaded from a JSON file
//! - `TranscoderConfig` - external encoder program and preview profile
//! - Fixed per-song file names

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// File names inside a song directory.
pub mod files {
    /// Source audio track.
    pub const SOURCE_AUDIO: &str = "main.mp3";

    /// Generated preview clip.
    pub const PREVIEW_AUDIO: &str = "preview.mp3";

    /// Single-pass chart.
    pub const TJA_CHART: &str = "main.tja";

    /// Sectioned charts, in lookup priority order.
    pub const OSU_CHARTS: [&str; 4] = ["easy.osu", "normal.osu", "hard.osu", "oni.osu"];
}

/// Preview encode profile defaults.
pub mod profile {
    /// Encoder passed to `-codec:a`.
    pub const CODEC: &str = "libmp3lame";

    /// Output sample rate in Hz.
    pub const SAMPLE_RATE: u32 = 32_000;

    /// Target bitrate in kbps.
    pub const BITRATE_KBPS: u32 = 92;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding one sub-directory per song id
    pub songs_dir: PathBuf,
    pub transcoder: TranscoderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("public/songs"),
            transcoder: TranscoderConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a JSON file. Missing keys take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscoderConfig {
    /// Program name or path of the ffmpeg binary
    pub program: String,
    pub codec: String,
    pub sample_rate: u32,
    pub bitrate_kbps: u32,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            program: "ffmpeg".to_string(),
            codec: profile::CODEC.to_string(),
            sample_rate: profile::SAMPLE_RATE,
            bitrate_kbps: profile::BITRATE_KBPS,
        }
    }
}
