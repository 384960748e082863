// Integration tests for the full classification pipeline with a scripted
// transcriber collaborator standing in for the external STT service.

use anyhow::Result;
use async_trait::async_trait;
use call_triage::{
    AudioFile, AudioSegment, CallPipeline, ClassificationReport, Classifier, NoiseSuppressor,
    PipelineConfig, PipelineError, Taxonomy, Transcriber,
};
use std::sync::Arc;
use std::time::Duration;

/// Returns a fixed text per sequence index, after an optional per-segment
/// delay. Delays let tests force completion order to differ from sequence
/// order.
struct ScriptedTranscriber {
    texts: Vec<&'static str>,
    delays_ms: Vec<u64>,
}

impl ScriptedTranscriber {
    fn new(texts: Vec<&'static str>) -> Self {
        Self {
            texts,
            delays_ms: Vec::new(),
        }
    }

    fn with_delays(mut self, delays_ms: Vec<u64>) -> Self {
        self.delays_ms = delays_ms;
        self
    }
}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn transcribe(&self, segment: &AudioSegment) -> Result<String> {
        let index = segment.sequence_index;
        if let Some(delay) = self.delays_ms.get(index) {
            tokio::time::sleep(Duration::from_millis(*delay)).await;
        }
        self.texts
            .get(index)
            .map(|text| text.to_string())
            .ok_or_else(|| anyhow::anyhow!("no script for segment {}", index))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Fails on one segment, succeeds on the rest.
struct FailingTranscriber {
    fail_index: usize,
}

#[async_trait]
impl Transcriber for FailingTranscriber {
    async fn transcribe(&self, segment: &AudioSegment) -> Result<String> {
        if segment.sequence_index == self.fail_index {
            anyhow::bail!("model crashed");
        }
        Ok(format!("segment {}", segment.sequence_index))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

struct FailingSuppressor;

impl NoiseSuppressor for FailingSuppressor {
    fn suppress(&self, _samples: &[i16], _sample_rate: u32) -> Result<Vec<i16>> {
        anyhow::bail!("denoiser exploded")
    }
}

struct PassthroughSuppressor;

impl NoiseSuppressor for PassthroughSuppressor {
    fn suppress(&self, samples: &[i16], _sample_rate: u32) -> Result<Vec<i16>> {
        Ok(samples.to_vec())
    }
}

/// Mono 16kHz recording long enough for `segments` one-second segments.
fn recording(segments: usize) -> AudioFile {
    let samples = vec![0i16; 16000 * segments];
    AudioFile {
        path: "test-call".to_string(),
        duration_seconds: segments as f64,
        sample_rate: 16000,
        channels: 1,
        samples,
    }
}

fn pipeline(transcriber: Arc<dyn Transcriber>, workers: usize) -> CallPipeline {
    CallPipeline::new(
        transcriber,
        Classifier::new(Taxonomy::appointment_intents()),
        PipelineConfig {
            target_sample_rate: 16000,
            segment_duration_ms: 1_000,
            transcribe_workers: workers,
        },
    )
}

async fn classify(transcriber: ScriptedTranscriber, workers: usize) -> ClassificationReport {
    pipeline(Arc::new(transcriber), workers)
        .classify_audio(&recording(3))
        .await
        .unwrap()
}

#[tokio::test]
async fn transcripts_are_merged_in_segment_order() {
    let report = classify(
        ScriptedTranscriber::new(vec!["hi i'll be there", "at five", "see you soon"]),
        1,
    )
    .await;

    assert_eq!(report.transcript, "hi i'll be there at five see you soon");
    assert_eq!(
        report.appointment_categories,
        vec![
            "Specific appointment or walk-in time / range within 1 hour (fuzzy match: 100%)"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn parallel_completion_order_does_not_change_the_transcript() {
    let texts = vec!["one", "two", "three"];

    // Reversed delays: segment 2 finishes first, segment 0 last
    let parallel = classify(
        ScriptedTranscriber::new(texts.clone()).with_delays(vec![60, 30, 5]),
        3,
    )
    .await;
    let sequential = classify(ScriptedTranscriber::new(texts), 1).await;

    assert_eq!(parallel.transcript, sequential.transcript);
    assert_eq!(
        parallel.appointment_categories,
        sequential.appointment_categories
    );
}

#[tokio::test]
async fn reported_transcript_is_trimmed_at_the_boundary() {
    let report = classify(
        ScriptedTranscriber::new(vec![" hello", "there", "caller "]),
        1,
    )
    .await;

    assert_eq!(report.transcript, "hello there caller");
}

#[tokio::test]
async fn one_failed_segment_aborts_the_whole_request() {
    let result = pipeline(Arc::new(FailingTranscriber { fail_index: 1 }), 2)
        .classify_audio(&recording(3))
        .await;

    match result {
        Err(PipelineError::Transcription(message)) => {
            assert!(message.contains("segment 1"), "got: {}", message);
        }
        other => panic!("expected transcription failure, got {:?}", other.map(|r| r.transcript)),
    }
}

#[tokio::test]
async fn empty_recording_classifies_as_no_match() {
    let report = pipeline(Arc::new(ScriptedTranscriber::new(vec![])), 1)
        .classify_audio(&recording(0))
        .await
        .unwrap();

    assert_eq!(report.transcript, "");
    assert_eq!(
        report.appointment_categories,
        vec!["Other - no match found".to_string()]
    );
}

#[tokio::test]
async fn noise_suppressor_failure_surfaces_as_noise_reduction() {
    let result = pipeline(Arc::new(ScriptedTranscriber::new(vec!["hi"])), 1)
        .with_noise_suppressor(Box::new(FailingSuppressor))
        .classify_audio(&recording(1))
        .await;

    assert!(matches!(result, Err(PipelineError::NoiseReduction(_))));
}

#[tokio::test]
async fn passthrough_suppressor_leaves_the_result_unchanged() {
    let with_suppressor = pipeline(Arc::new(ScriptedTranscriber::new(vec!["car wash"])), 1)
        .with_noise_suppressor(Box::new(PassthroughSuppressor))
        .classify_audio(&recording(1))
        .await
        .unwrap();

    let without = pipeline(Arc::new(ScriptedTranscriber::new(vec!["car wash"])), 1)
        .classify_audio(&recording(1))
        .await
        .unwrap();

    assert_eq!(with_suppressor.transcript, without.transcript);
    assert_eq!(
        with_suppressor.appointment_categories,
        without.appointment_categories
    );
}

#[tokio::test]
async fn unsupported_audio_surfaces_as_conversion_failure() {
    let audio = AudioFile {
        path: "low-rate".to_string(),
        duration_seconds: 1.0,
        sample_rate: 8000, // below the 16kHz target; decimation cannot upsample
        channels: 1,
        samples: vec![0i16; 8000],
    };

    let result = pipeline(Arc::new(ScriptedTranscriber::new(vec!["hi"])), 1)
        .classify_audio(&audio)
        .await;

    assert!(matches!(result, Err(PipelineError::AudioConversion(_))));
}

#[tokio::test]
async fn report_serializes_with_the_reporting_contract_fields() {
    let report = classify(ScriptedTranscriber::new(vec!["hello", "", ""]), 1).await;

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("transcript").is_some());
    assert!(json.get("appointment_categories").is_some());
    assert_eq!(json["appointment_categories"].as_array().unwrap().len(), 1);
}
