pub mod file;
pub mod normalize;
pub mod segment;

pub use file::AudioFile;
pub use normalize::{AudioNormalizer, DecimatingNormalizer, NoiseSuppressor, NormalizedAudio};
pub use segment::{AudioSegment, Segmenter};
