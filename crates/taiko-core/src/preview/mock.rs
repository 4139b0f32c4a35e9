//! Mock transcoder for testing
//!
//! Records every request and writes a small placeholder file instead of
//! running an encoder.

use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::Duration;

use super::transcode::{Transcode, TranscodeRequest};
use crate::chart::PreviewOffset;
use crate::error::{Error, Result};
use crate::song::SongId;

/// Bytes written to the destination by a successful mock transcode.
pub const MOCK_PREVIEW_BYTES: &[u8] = b"mock preview";

/// A recorded transcode request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeCall {
    pub song_id: SongId,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub seek: PreviewOffset,
}

#[derive(Debug, Default)]
pub struct MockTranscoder {
    calls: Mutex<Vec<TranscodeCall>>,
    fail: bool,
    delay: Option<Duration>,
}

impl MockTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transcoder that leaves a truncated file behind and reports failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Sleep before writing, to widen race windows in concurrency tests.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<TranscodeCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Transcode for MockTranscoder {
    fn transcode(&self, request: &TranscodeRequest<'_>) -> Result<()> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(TranscodeCall {
                song_id: request.song_id.clone(),
                source: request.source.to_path_buf(),
                destination: request.destination.to_path_buf(),
                seek: request.seek,
            });

        if let Some(delay) = self.delay {
            thread::sleep(delay);
        }

        if self.fail {
            fs::write(request.destination, &MOCK_PREVIEW_BYTES[..4])?;
            return Err(Error::TranscodeFailed {
                song_id: request.song_id.to_string(),
                message: "mock transcoder failure".to_string(),
            });
        }

        fs::write(request.destination, MOCK_PREVIEW_BYTES)?;
        Ok(())
    }
}
