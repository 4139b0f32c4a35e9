use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid song id: {0:?}")]
    InvalidSongId(String),

    #[error("Unknown chart format: {0:?}")]
    UnknownChartFormat(String),

    #[error("Invalid preview time: {0:?}")]
    InvalidPreviewTime(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Transcoder not found: {0}")]
    TranscoderNotFound(String),

    #[error("Transcode failed for song {song_id}: {message}")]
    TranscodeFailed { song_id: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
