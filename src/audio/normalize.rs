use anyhow::Result;
use tracing::info;

use super::file::AudioFile;

/// Canonical PCM stream the rest of the pipeline operates on: mono, fixed
/// sample rate.
#[derive(Debug, Clone)]
pub struct NormalizedAudio {
    pub samples: Vec<i16>,
    pub sample_rate: u32,
}

/// Audio-normalization collaborator.
///
/// Produces a mono stream at the pipeline's canonical sample rate from
/// arbitrary WAV input. Failures surface to the pipeline caller as
/// `PipelineError::AudioConversion`.
pub trait AudioNormalizer: Send + Sync {
    fn normalize(&self, audio: &AudioFile) -> Result<NormalizedAudio>;
}

/// Optional denoising collaborator, applied between normalization and
/// segmentation. Must return a stream of identical duration and sample rate.
/// Failures surface as `PipelineError::NoiseReduction`.
pub trait NoiseSuppressor: Send + Sync {
    fn suppress(&self, samples: &[i16], sample_rate: u32) -> Result<Vec<i16>>;
}

/// Normalizer that sums stereo to mono and downsamples by decimation.
///
/// Decimation only divides the rate, so inputs below the target rate (or at
/// a rate that is not an integer multiple of it) are rejected rather than
/// approximated.
pub struct DecimatingNormalizer {
    target_sample_rate: u32,
}

impl DecimatingNormalizer {
    pub fn new(target_sample_rate: u32) -> Self {
        Self { target_sample_rate }
    }

    /// Sum left and right channels, clamped to the i16 range.
    fn stereo_to_mono(samples: &[i16]) -> Vec<i16> {
        let mut mono = Vec::with_capacity(samples.len() / 2);
        for pair in samples.chunks_exact(2) {
            let sum = pair[0] as i32 + pair[1] as i32;
            mono.push(sum.clamp(i16::MIN as i32, i16::MAX as i32) as i16);
        }
        mono
    }

    /// Decimate: take every Nth sample.
    fn downsample(samples: &[i16], ratio: u32) -> Vec<i16> {
        samples.iter().step_by(ratio as usize).copied().collect()
    }
}

impl AudioNormalizer for DecimatingNormalizer {
    fn normalize(&self, audio: &AudioFile) -> Result<NormalizedAudio> {
        let mono = match audio.channels {
            1 => audio.samples.clone(),
            2 => Self::stereo_to_mono(&audio.samples),
            n => anyhow::bail!("Unsupported channel count: {}", n),
        };

        let samples = if audio.sample_rate == self.target_sample_rate {
            mono
        } else {
            if audio.sample_rate < self.target_sample_rate {
                anyhow::bail!(
                    "Cannot upsample {}Hz to {}Hz",
                    audio.sample_rate,
                    self.target_sample_rate
                );
            }
            if audio.sample_rate % self.target_sample_rate != 0 {
                anyhow::bail!(
                    "{}Hz is not an integer multiple of {}Hz",
                    audio.sample_rate,
                    self.target_sample_rate
                );
            }
            Self::downsample(&mono, audio.sample_rate / self.target_sample_rate)
        };

        info!(
            "Normalized {}Hz {}ch -> {}Hz mono ({} samples)",
            audio.sample_rate,
            audio.channels,
            self.target_sample_rate,
            samples.len()
        );

        Ok(NormalizedAudio {
            samples,
            sample_rate: self.target_sample_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn audio(sample_rate: u32, channels: u16, samples: Vec<i16>) -> AudioFile {
        let duration_seconds =
            samples.len() as f64 / (sample_rate as f64 * channels as f64);
        AudioFile {
            path: "test".to_string(),
            duration_seconds,
            sample_rate,
            channels,
            samples,
        }
    }

    #[test]
    fn mono_at_target_rate_passes_through() {
        let normalizer = DecimatingNormalizer::new(16000);
        let input = audio(16000, 1, vec![1, 2, 3, 4]);

        let out = normalizer.normalize(&input).unwrap();
        assert_eq!(out.sample_rate, 16000);
        assert_eq!(out.samples, vec![1, 2, 3, 4]);
    }

    #[test]
    fn stereo_is_summed_to_mono() {
        let normalizer = DecimatingNormalizer::new(16000);
        let input = audio(16000, 2, vec![100, 50, -200, -100, i16::MAX, i16::MAX]);

        let out = normalizer.normalize(&input).unwrap();
        assert_eq!(out.samples, vec![150, -300, i16::MAX]);
    }

    #[test]
    fn downsamples_by_decimation() {
        let normalizer = DecimatingNormalizer::new(16000);
        let input = audio(48000, 1, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);

        let out = normalizer.normalize(&input).unwrap();
        assert_eq!(out.samples, vec![0, 3, 6]);
    }

    #[test]
    fn rejects_upsampling() {
        let normalizer = DecimatingNormalizer::new(16000);
        let input = audio(8000, 1, vec![0; 16]);

        assert!(normalizer.normalize(&input).is_err());
    }

    #[test]
    fn rejects_non_integer_ratio() {
        let normalizer = DecimatingNormalizer::new(16000);
        let input = audio(44100, 1, vec![0; 16]);

        assert!(normalizer.normalize(&input).is_err());
    }
}
