use tracing::info;

/// A bounded-duration slice of the normalized call audio, transcribed
/// independently of its neighbors.
#[derive(Debug, Clone)]
pub struct AudioSegment {
    /// Position of this segment in the stream (0-indexed)
    pub sequence_index: usize,
    /// Mono PCM samples (i16)
    pub samples: Vec<i16>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Splits a normalized mono stream into fixed-duration segments, in order,
/// with no overlap and no gaps. The final segment may be shorter than the
/// nominal duration.
#[derive(Debug, Clone)]
pub struct Segmenter {
    sample_rate: u32,
    segment_duration_ms: u64,
}

impl Segmenter {
    /// Nominal segment duration (30 seconds)
    pub const DEFAULT_SEGMENT_MS: u64 = 30_000;

    pub fn new(sample_rate: u32, segment_duration_ms: u64) -> Self {
        Self {
            sample_rate,
            segment_duration_ms,
        }
    }

    pub fn segment(&self, samples: &[i16]) -> Vec<AudioSegment> {
        let samples_per_segment =
            (self.sample_rate as u64 * self.segment_duration_ms / 1000) as usize;

        let segments: Vec<AudioSegment> = samples
            .chunks(samples_per_segment.max(1))
            .enumerate()
            .map(|(sequence_index, chunk)| AudioSegment {
                sequence_index,
                samples: chunk.to_vec(),
                duration_ms: chunk.len() as u64 * 1000 / self.sample_rate as u64,
            })
            .collect();

        info!(
            "Split {} samples into {} segments of <= {}ms",
            samples.len(),
            segments.len(),
            self.segment_duration_ms
        );

        segments
    }
}
