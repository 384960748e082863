use thiserror::Error;

/// Failures surfaced by the classification pipeline.
///
/// Every external-collaborator failure maps to exactly one variant. None of
/// them are retried inside the pipeline; retry policy belongs to the caller.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The normalization collaborator could not produce a usable PCM stream.
    #[error("audio conversion failed: {0}")]
    AudioConversion(String),

    /// The denoising collaborator raised an error.
    #[error("noise reduction failed: {0}")]
    NoiseReduction(String),

    /// A segment failed to transcribe. The whole request is aborted; partial
    /// transcripts are never handed to the classifier.
    #[error("transcription failed: {0}")]
    Transcription(String),

    /// No input audio was ever supplied, as opposed to processing failing.
    #[error("no input audio was provided")]
    NoInput,
}
