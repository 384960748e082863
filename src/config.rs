use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub audio: AudioConfig,
    pub transcriber: TranscriberConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct AudioConfig {
    /// Canonical sample rate the pipeline operates on (Whisper-style STT
    /// services expect 16kHz mono)
    pub sample_rate: u32,
    /// Nominal duration of each transcription segment in milliseconds
    pub segment_duration_ms: u64,
}

#[derive(Debug, Deserialize)]
pub struct TranscriberConfig {
    pub nats_url: String,
    /// Request/reply subject the STT service listens on
    pub subject: String,
    pub request_timeout_secs: u64,
    /// Maximum number of segments transcribed concurrently
    pub workers: usize,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
