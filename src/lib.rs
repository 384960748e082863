pub mod audio;
pub mod classify;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod transcribe;

pub use audio::{
    AudioFile, AudioNormalizer, AudioSegment, DecimatingNormalizer, NoiseSuppressor,
    NormalizedAudio, Segmenter,
};
pub use classify::{Category, ClassificationResult, Classifier, Taxonomy};
pub use config::Config;
pub use error::PipelineError;
pub use pipeline::{CallPipeline, ClassificationReport, PipelineConfig};
pub use transcribe::{NatsTranscriber, Transcriber, Transcript, TranscriptAggregator};
