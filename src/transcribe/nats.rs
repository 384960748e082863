use anyhow::{Context, Result};
use async_nats::Client;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;

use super::Transcriber;
use crate::audio::AudioSegment;

/// Request sent to the STT service for one segment
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub sequence: u32,
    /// Base64-encoded PCM bytes (i16 little-endian, mono)
    pub pcm: String,
    pub sample_rate: u32,
    pub channels: u16,
    pub duration_ms: u64,
    /// RFC3339 timestamp
    pub timestamp: String,
}

/// Reply from the STT service
#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentReply {
    pub text: String,
    pub confidence: Option<f32>,
}

/// Transcriber adapter that sends segments to an external STT service over
/// NATS request/reply.
pub struct NatsTranscriber {
    client: Client,
    subject: String,
    sample_rate: u32,
    request_timeout: Duration,
}

impl NatsTranscriber {
    /// Connect to the NATS server backing the STT service
    pub async fn connect(
        url: &str,
        subject: String,
        sample_rate: u32,
        request_timeout: Duration,
    ) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let client = async_nats::connect(url)
            .await
            .context("Failed to connect to NATS")?;

        info!("Connected to NATS, STT subject: {}", subject);

        Ok(Self {
            client,
            subject,
            sample_rate,
            request_timeout,
        })
    }
}

#[async_trait::async_trait]
impl Transcriber for NatsTranscriber {
    async fn transcribe(&self, segment: &AudioSegment) -> Result<String> {
        let pcm_bytes: Vec<u8> = segment
            .samples
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();

        let request = SegmentRequest {
            sequence: segment.sequence_index as u32,
            pcm: base64::engine::general_purpose::STANDARD.encode(&pcm_bytes),
            sample_rate: self.sample_rate,
            channels: 1,
            duration_ms: segment.duration_ms,
            timestamp: chrono::Utc::now().to_rfc3339(),
        };

        let payload = serde_json::to_vec(&request)?;

        let reply = tokio::time::timeout(
            self.request_timeout,
            self.client.request(self.subject.clone(), payload.into()),
        )
        .await
        .with_context(|| format!("STT request for segment {} timed out", segment.sequence_index))?
        .with_context(|| format!("STT request for segment {} failed", segment.sequence_index))?;

        let reply: SegmentReply = serde_json::from_slice(&reply.payload)
            .context("Failed to parse STT reply")?;

        info!(
            "Transcribed segment {} ({}ms): {} chars",
            segment.sequence_index,
            segment.duration_ms,
            reply.text.len()
        );

        Ok(reply.text)
    }

    fn name(&self) -> &str {
        "nats-stt"
    }
}
