//! Preview offset resolution and preview audio generation.

mod generator;
mod resolver;
pub mod transcode;

// Mock transcoder for testing (always available for unit and integration tests)
#[doc(hidden)]
pub mod mock;

pub use generator::{PreviewGenerator, PreviewOutcome};
pub use resolver::PreviewResolver;
pub use transcode::{Ffmpeg, Transcode, TranscodeRequest};

#[doc(hidden)]
pub use mock::{MockTranscoder, TranscodeCall};
