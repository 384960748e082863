use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use call_triage::{
    CallPipeline, Classifier, Config, NatsTranscriber, PipelineConfig, PipelineError, Taxonomy,
};

/// Classify the appointment intent of a recorded voice call
#[derive(Parser, Debug)]
#[command(name = "call-triage", version)]
struct Args {
    /// Path to the call recording (16-bit PCM WAV)
    input: Option<PathBuf>,

    /// Configuration file (name without extension, resolved by the config
    /// loader)
    #[arg(short, long, default_value = "config/call-triage")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} starting", cfg.service.name);

    let input = args.input.ok_or(PipelineError::NoInput)?;

    let transcriber = NatsTranscriber::connect(
        &cfg.transcriber.nats_url,
        cfg.transcriber.subject.clone(),
        cfg.audio.sample_rate,
        Duration::from_secs(cfg.transcriber.request_timeout_secs),
    )
    .await?;

    let classifier = Classifier::new(Taxonomy::appointment_intents());
    let pipeline = CallPipeline::new(
        Arc::new(transcriber),
        classifier,
        PipelineConfig {
            target_sample_rate: cfg.audio.sample_rate,
            segment_duration_ms: cfg.audio.segment_duration_ms,
            transcribe_workers: cfg.transcriber.workers,
        },
    );

    let report = pipeline.classify_file(&input).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
