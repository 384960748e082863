use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::audio::{
    AudioFile, AudioNormalizer, AudioSegment, DecimatingNormalizer, NoiseSuppressor, Segmenter,
};
use crate::classify::Classifier;
use crate::error::PipelineError;
use crate::transcribe::{Transcriber, Transcript, TranscriptAggregator};

/// Externally visible result of one classification request
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    /// Merged transcript, stripped of leading/trailing whitespace
    pub transcript: String,
    /// The single winning category label (or the no-match sentinel)
    pub appointment_categories: Vec<String>,
    pub classified_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Canonical sample rate after normalization
    pub target_sample_rate: u32,
    /// Nominal duration of each transcription segment
    pub segment_duration_ms: u64,
    /// Maximum number of segments transcribed concurrently
    pub transcribe_workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: 16000,
            segment_duration_ms: Segmenter::DEFAULT_SEGMENT_MS,
            transcribe_workers: 4,
        }
    }
}

/// End-to-end classification of one call recording:
/// normalize -> denoise (optional) -> segment -> transcribe -> aggregate ->
/// classify.
///
/// Segments are transcribed concurrently up to `transcribe_workers`; the
/// aggregator re-orders results by sequence index, so the transcript is
/// identical to strictly sequential processing regardless of completion
/// order. No state is carried between requests.
pub struct CallPipeline {
    normalizer: Box<dyn AudioNormalizer>,
    suppressor: Option<Box<dyn NoiseSuppressor>>,
    transcriber: Arc<dyn Transcriber>,
    classifier: Classifier,
    config: PipelineConfig,
}

impl CallPipeline {
    pub fn new(
        transcriber: Arc<dyn Transcriber>,
        classifier: Classifier,
        config: PipelineConfig,
    ) -> Self {
        Self {
            normalizer: Box::new(DecimatingNormalizer::new(config.target_sample_rate)),
            suppressor: None,
            transcriber,
            classifier,
            config,
        }
    }

    /// Replace the default normalization collaborator
    pub fn with_normalizer(mut self, normalizer: Box<dyn AudioNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Enable the optional denoising stage
    pub fn with_noise_suppressor(mut self, suppressor: Box<dyn NoiseSuppressor>) -> Self {
        self.suppressor = Some(suppressor);
        self
    }

    /// Classify a call recording from a WAV file on disk
    pub async fn classify_file(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<ClassificationReport, PipelineError> {
        let audio = AudioFile::open(path)
            .map_err(|e| PipelineError::AudioConversion(format!("{:#}", e)))?;
        self.classify_audio(&audio).await
    }

    /// Classify an already-decoded call recording
    pub async fn classify_audio(
        &self,
        audio: &AudioFile,
    ) -> Result<ClassificationReport, PipelineError> {
        let normalized = self
            .normalizer
            .normalize(audio)
            .map_err(|e| PipelineError::AudioConversion(format!("{:#}", e)))?;

        let samples = match &self.suppressor {
            Some(suppressor) => suppressor
                .suppress(&normalized.samples, normalized.sample_rate)
                .map_err(|e| PipelineError::NoiseReduction(format!("{:#}", e)))?,
            None => normalized.samples,
        };

        let segmenter = Segmenter::new(normalized.sample_rate, self.config.segment_duration_ms);
        let segments = segmenter.segment(&samples);

        let transcript = self.transcribe_all(segments).await?;
        if transcript.is_empty() {
            warn!("Aggregated transcript is empty; classifying anyway");
        }

        let result = self.classifier.classify(transcript.text());
        info!("Classified call as: {}", result.label);

        Ok(ClassificationReport {
            transcript: transcript.trimmed().to_string(),
            appointment_categories: vec![result.label],
            classified_at: Utc::now(),
        })
    }

    /// Transcribe all segments with a bounded worker pool, then merge in
    /// sequence order. The first failed segment aborts the request; no
    /// partial transcript survives.
    async fn transcribe_all(
        &self,
        segments: Vec<AudioSegment>,
    ) -> Result<Transcript, PipelineError> {
        let workers = self.config.transcribe_workers.max(1);
        info!(
            "Transcribing {} segment(s) via {} (workers: {})",
            segments.len(),
            self.transcriber.name(),
            workers
        );

        let mut results = stream::iter(segments)
            .map(|segment| {
                let transcriber = Arc::clone(&self.transcriber);
                async move {
                    let index = segment.sequence_index;
                    let text = transcriber.transcribe(&segment).await.map_err(|e| {
                        PipelineError::Transcription(format!("segment {}: {:#}", index, e))
                    })?;
                    Ok::<(usize, String), PipelineError>((index, text))
                }
            })
            .buffer_unordered(workers);

        let mut aggregator = TranscriptAggregator::new();
        while let Some(part) = results.next().await {
            let (sequence_index, text) = part?;
            aggregator.push(sequence_index, text);
        }

        Ok(aggregator.finish())
    }
}
