//! # taiko-core
//!
//! Song preview core for a rhythm-game song library.
//!
//! This crate provides:
//! - Chart parsing for the `tja` and `osu` formats
//! - Preview offset resolution from a song's chart files
//! - Lazy, idempotent generation of `preview.mp3` through an external transcoder
//!
//! ```no_run
//! use taiko_core::{ChartFormat, Config, Ffmpeg, PreviewGenerator, PreviewResolver, SongId};
//!
//! # fn main() -> taiko_core::Result<()> {
//! let config = Config::default();
//! let generator = PreviewGenerator::new(
//!     PreviewResolver::new(&config),
//!     Ffmpeg::new(config.transcoder.clone()),
//! );
//! let id: SongId = "42".parse()?;
//! let outcome = generator.ensure_preview(&id, ChartFormat::Osu)?;
//! println!("{:?}", outcome.path());
//! # Ok(())
//! # }
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod preview;
pub mod song;

// Re-export from chart module
pub use chart::{ChartDocument, ChartFormat, PreviewOffset, decode_chart};

// Re-export from config module
pub use config::{Config, TranscoderConfig};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from preview module
pub use preview::{
    Ffmpeg, PreviewGenerator, PreviewOutcome, PreviewResolver, Transcode, TranscodeRequest,
};

// Re-export from song module
pub use song::{SongDir, SongId};
