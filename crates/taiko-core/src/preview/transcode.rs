//! External transcoder abstraction.
//!
//! The generator only needs "cut this file from here and encode it". The
//! [`Transcode`] trait keeps that seam open so tests can run without ffmpeg.

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::chart::PreviewOffset;
use crate::config::TranscoderConfig;
use crate::error::{Error, Result};
use crate::song::SongId;

/// One preview encode job.
#[derive(Debug, Clone, Copy)]
pub struct TranscodeRequest<'a> {
    pub song_id: &'a SongId,
    pub source: &'a Path,
    pub destination: &'a Path,
    /// Seek position in the source
    pub seek: PreviewOffset,
}

/// Trait for encoding a preview clip.
///
/// Implementations must write `request.destination`, replacing any existing
/// file, and return an error when the encode did not complete.
pub trait Transcode {
    fn transcode(&self, request: &TranscodeRequest<'_>) -> Result<()>;
}

/// Runs `ffmpeg` as a child process and waits for it.
#[derive(Debug, Clone)]
pub struct Ffmpeg {
    config: TranscoderConfig,
}

impl Ffmpeg {
    pub fn new(config: TranscoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TranscoderConfig {
        &self.config
    }

    /// Command-line arguments for a request, program name excluded.
    pub fn args(&self, request: &TranscodeRequest<'_>) -> Vec<OsString> {
        vec![
            "-ss".into(),
            format!("{:.3}", request.seek.as_secs_f64()).into(),
            "-i".into(),
            request.source.into(),
            "-codec:a".into(),
            self.config.codec.as_str().into(),
            "-ar".into(),
            self.config.sample_rate.to_string().into(),
            "-b:a".into(),
            format!("{}k", self.config.bitrate_kbps).into(),
            "-y".into(),
            "-loglevel".into(),
            "panic".into(),
            request.destination.into(),
        ]
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new(TranscoderConfig::default())
    }
}

impl Transcode for Ffmpeg {
    fn transcode(&self, request: &TranscodeRequest<'_>) -> Result<()> {
        let args = self.args(request);
        debug!("Running {} {:?}", self.config.program, args);

        let status = Command::new(&self.config.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => {
                    Error::TranscoderNotFound(self.config.program.clone())
                }
                _ => Error::Io(e),
            })?;

        if !status.success() {
            return Err(Error::TranscodeFailed {
                song_id: request.song_id.to_string(),
                message: format!("{} exited with {}", self.config.program, status),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request<'a>(id: &'a SongId, seek_ms: u64) -> TranscodeRequest<'a> {
        TranscodeRequest {
            song_id: id,
            source: Path::new("songs/1/main.mp3"),
            destination: Path::new("songs/1/preview.mp3"),
            seek: PreviewOffset::from_millis(seek_ms),
        }
    }

    #[test]
    fn test_ffmpeg_args() {
        let id = SongId::new("1").unwrap();
        let args = Ffmpeg::default().args(&request(&id, 5000));

        let expected = [
            "-ss",
            "5.000",
            "-i",
            "songs/1/main.mp3",
            "-codec:a",
            "libmp3lame",
            "-ar",
            "32000",
            "-b:a",
            "92k",
            "-y",
            "-loglevel",
            "panic",
            "songs/1/preview.mp3",
        ];
        assert_eq!(args, expected.map(OsString::from));
    }

    #[test]
    fn test_ffmpeg_args_custom_profile() {
        let id = SongId::new("1").unwrap();
        let ffmpeg = Ffmpeg::new(TranscoderConfig {
            program: "avconv".to_string(),
            codec: "libvorbis".to_string(),
            sample_rate: 44100,
            bitrate_kbps: 128,
        });
        let args = ffmpeg.args(&request(&id, 1250));

        assert_eq!(args[1], "1.250");
        assert_eq!(args[5], "libvorbis");
        assert_eq!(args[7], "44100");
        assert_eq!(args[9], "128k");
    }

    #[test]
    fn test_missing_program() {
        let id = SongId::new("1").unwrap();
        let ffmpeg = Ffmpeg::new(TranscoderConfig {
            program: "taiko-no-such-transcoder".to_string(),
            ..Default::default()
        });

        let result = ffmpeg.transcode(&request(&id, 1000));
        assert!(matches!(
            result,
            Err(Error::TranscoderNotFound(p)) if p == "taiko-no-such-transcoder"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        let id = SongId::new("1").unwrap();
        let ffmpeg = Ffmpeg::new(TranscoderConfig {
            program: "false".to_string(),
            ..Default::default()
        });

        let result = ffmpeg.transcode(&request(&id, 1000));
        assert!(matches!(
            result,
            Err(Error::TranscodeFailed { ref song_id, .. }) if song_id == "1"
        ));
    }
}
