use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::chart::{ChartFormat, PreviewOffset};
use crate::config::Config;
use crate::error::Result;
use crate::song::{SongDir, SongId};

/// Finds a song's chart on disk and reads its preview offset.
#[derive(Debug, Clone)]
pub struct PreviewResolver {
    songs_dir: PathBuf,
}

impl PreviewResolver {
    pub fn new(config: &Config) -> Self {
        Self::with_songs_dir(&config.songs_dir)
    }

    pub fn with_songs_dir<P: AsRef<Path>>(songs_dir: P) -> Self {
        Self {
            songs_dir: songs_dir.as_ref().to_path_buf(),
        }
    }

    pub fn songs_dir(&self) -> &Path {
        &self.songs_dir
    }

    pub fn song_dir(&self, id: &SongId) -> SongDir {
        SongDir::new(&self.songs_dir, id)
    }

    /// Chart file that holds the preview point for `format`, if present.
    pub fn chart_path(&self, id: &SongId, format: ChartFormat) -> Option<PathBuf> {
        let dir = self.song_dir(id);
        match format {
            ChartFormat::Tja => Some(dir.tja_chart()).filter(|path| path.is_file()),
            ChartFormat::Osu => dir.osu_chart(),
        }
    }

    /// Preview offset declared by the song's chart.
    ///
    /// A song without a chart of the requested format, or without a
    /// directory at all, resolves to zero. Read errors on a chart that
    /// exists are returned.
    pub fn resolve_offset(&self, id: &SongId, format: ChartFormat) -> Result<PreviewOffset> {
        let Some(path) = self.chart_path(id, format) else {
            debug!("No {} chart for song #{}", format, id);
            return Ok(PreviewOffset::ZERO);
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            // Removed between the lookup and the read
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(PreviewOffset::ZERO),
            Err(e) => return Err(e.into()),
        };

        let offset = format.preview_offset(&bytes);
        debug!("Song #{} preview offset {} from {:?}", id, offset, path);
        Ok(offset)
    }

    /// Guess a song's chart format from the files present.
    ///
    /// `main.tja` wins over `.osu` charts.
    pub fn detect_format(&self, id: &SongId) -> Option<ChartFormat> {
        [ChartFormat::Tja, ChartFormat::Osu]
            .into_iter()
            .find(|&format| self.chart_path(id, format).is_some())
    }

    /// Ids of all song directories, in numeric order.
    ///
    /// Entries whose names are not song ids are ignored. A missing songs
    /// directory is an empty library.
    pub fn song_ids(&self) -> Result<Vec<SongId>> {
        let entries = match fs::read_dir(&self.songs_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(id) = entry.file_name().to_str().and_then(|n| SongId::new(n).ok()) {
                ids.push(id);
            }
        }

        ids.sort_by(|a, b| {
            let (a, b) = (a.as_str(), b.as_str());
            let (a_trim, b_trim) = (a.trim_start_matches('0'), b.trim_start_matches('0'));
            a_trim
                .len()
                .cmp(&b_trim.len())
                .then_with(|| a_trim.cmp(b_trim))
                .then_with(|| a.cmp(b))
        });
        Ok(ids)
    }
}
