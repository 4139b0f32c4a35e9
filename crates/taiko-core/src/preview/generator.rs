use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use super::resolver::PreviewResolver;
use super::transcode::{Transcode, TranscodeRequest};
use crate::chart::{ChartFormat, PreviewOffset};
use crate::error::{Error, Result};
use crate::song::{SongDir, SongId};

/// What `ensure_preview` did for a song.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// The preview was already on disk; nothing was done.
    Existing(PathBuf),
    /// The preview was generated by this call.
    Created(PathBuf),
    /// The song has no source audio to cut from.
    NoSourceAudio,
    /// The chart declares no preview point, so generation was skipped.
    NoPreviewOffset,
}

impl PreviewOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Existing(path) | Self::Created(path) => Some(path.as_path()),
            Self::NoSourceAudio | Self::NoPreviewOffset => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Existing(path) | Self::Created(path) => Some(path),
            Self::NoSourceAudio | Self::NoPreviewOffset => None,
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// One mutex per song, created on first use.
#[derive(Debug, Default)]
struct SongLocks {
    locks: Mutex<HashMap<SongId, Arc<Mutex<()>>>>,
}

impl SongLocks {
    fn get(&self, id: &SongId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(locks.entry(id.clone()).or_default())
    }

    /// Drop the song's entry once no caller holds or waits on it.
    fn release(&self, id: &SongId, lock: Arc<Mutex<()>>) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        drop(lock);
        if locks.get(id).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(id);
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Lazily produces `preview.mp3` for songs.
///
/// The preview file's existence is the cache: once it is on disk it is
/// returned as-is. The check and the encode run under a per-song lock, so
/// concurrent callers for one song trigger a single transcode.
#[derive(Debug)]
pub struct PreviewGenerator<T> {
    resolver: PreviewResolver,
    transcoder: T,
    locks: SongLocks,
}

impl<T: Transcode> PreviewGenerator<T> {
    pub fn new(resolver: PreviewResolver, transcoder: T) -> Self {
        Self {
            resolver,
            transcoder,
            locks: SongLocks::default(),
        }
    }

    pub fn resolver(&self) -> &PreviewResolver {
        &self.resolver
    }

    pub fn transcoder(&self) -> &T {
        &self.transcoder
    }

    /// Make sure a preview exists for the song, resolving its offset from
    /// the chart of the given format only when an encode is needed.
    pub fn ensure_preview(&self, id: &SongId, format: ChartFormat) -> Result<PreviewOutcome> {
        self.ensure_with(id, || self.resolver.resolve_offset(id, format))
    }

    /// Make sure a preview exists for the song, cutting at `offset`.
    pub fn generate(&self, id: &SongId, offset: PreviewOffset) -> Result<PreviewOutcome> {
        self.ensure_with(id, || Ok(offset))
    }

    fn ensure_with<F>(&self, id: &SongId, offset: F) -> Result<PreviewOutcome>
    where
        F: FnOnce() -> Result<PreviewOffset>,
    {
        let dir = self.resolver.song_dir(id);
        if !dir.source_audio().is_file() {
            debug!("No source audio for song #{}", id);
            return Ok(PreviewOutcome::NoSourceAudio);
        }

        let lock = self.locks.get(id);
        let result = {
            let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
            self.ensure_locked(id, &dir, offset)
        };
        self.locks.release(id, lock);
        result
    }

    fn ensure_locked<F>(&self, id: &SongId, dir: &SongDir, offset: F) -> Result<PreviewOutcome>
    where
        F: FnOnce() -> Result<PreviewOffset>,
    {
        let preview = dir.preview_audio();
        if preview.is_file() {
            return Ok(PreviewOutcome::Existing(preview));
        }

        let offset = offset()?;
        if offset.is_zero() {
            info!("Skipping song #{} due to no preview", id);
            return Ok(PreviewOutcome::NoPreviewOffset);
        }

        // Encode beside the preview and rename on success, so an interrupted
        // encode never shows up as preview.mp3. The temp file is removed on
        // drop, including while unwinding.
        let partial = tempfile::Builder::new()
            .prefix(".preview-")
            .suffix(".mp3")
            .tempfile_in(dir.root())?
            .into_temp_path();

        info!("Making preview for song #{} at {:.3}s", id, offset.as_secs_f64());
        let source = dir.source_audio();
        let request = TranscodeRequest {
            song_id: id,
            source: &source,
            destination: &partial,
            seek: offset,
        };
        self.transcoder.transcode(&request)?;

        partial.persist(&preview).map_err(|e| Error::Io(e.error))?;
        Ok(PreviewOutcome::Created(preview))
    }
}
