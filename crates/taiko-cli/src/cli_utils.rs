//! Shared helpers for CLI commands.

use std::path::{Path, PathBuf};

use taiko_core::{Config, Ffmpeg, PreviewGenerator, PreviewResolver};
use tracing::{info, warn};

/// Load the config file, falling back to defaults when it is missing or
/// invalid, then apply the songs directory override.
pub fn load_config(path: &Path, songs_dir: Option<PathBuf>) -> Config {
    let mut config = if path.is_file() {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Invalid {}: {}, using default values", path.display(), e);
                Config::default()
            }
        }
    } else {
        warn!("No {} found, using default values", path.display());
        Config::default()
    };

    if let Some(songs_dir) = songs_dir {
        config.songs_dir = songs_dir;
    }
    config
}

pub fn build_generator(config: &Config) -> PreviewGenerator<Ffmpeg> {
    PreviewGenerator::new(
        PreviewResolver::new(config),
        Ffmpeg::new(config.transcoder.clone()),
    )
}
