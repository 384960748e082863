pub mod aggregate;
pub mod nats;

pub use aggregate::{Transcript, TranscriptAggregator};
pub use nats::NatsTranscriber;

use crate::audio::AudioSegment;
use anyhow::Result;

/// Speech-to-text collaborator.
///
/// Converts one audio segment into text. The pipeline assumes nothing about
/// the implementation beyond this contract; repeated calls with the same
/// segment should return equivalent text, but exact determinism is not
/// required of the underlying model.
#[async_trait::async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe one segment. Any failure aborts the whole request.
    async fn transcribe(&self, segment: &AudioSegment) -> Result<String>;

    /// Adapter name for logging
    fn name(&self) -> &str;
}
