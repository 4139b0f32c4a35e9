//! Song identifiers and the on-disk layout of a song directory.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;

use crate::config::files;
use crate::error::{Error, Result};

/// Numeric song identifier.
///
/// Only non-empty ASCII digit strings are accepted, so an id can always be
/// joined onto the songs directory without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SongId(String);

impl SongId {
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidSongId(id));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for SongId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Paths of the files belonging to one song.
#[derive(Debug, Clone)]
pub struct SongDir {
    root: PathBuf,
}

impl SongDir {
    pub fn new<P: AsRef<Path>>(songs_dir: P, id: &SongId) -> Self {
        Self {
            root: songs_dir.as_ref().join(id.as_str()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_audio(&self) -> PathBuf {
        self.root.join(files::SOURCE_AUDIO)
    }

    pub fn preview_audio(&self) -> PathBuf {
        self.root.join(files::PREVIEW_AUDIO)
    }

    pub fn tja_chart(&self) -> PathBuf {
        self.root.join(files::TJA_CHART)
    }

    /// First sectioned chart present on disk, by difficulty priority.
    ///
    /// A missing song directory simply has no charts.
    pub fn osu_chart(&self) -> Option<PathBuf> {
        files::OSU_CHARTS
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }
}
