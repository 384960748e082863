pub mod classifier;
pub mod matcher;
pub mod score;
pub mod taxonomy;

pub use classifier::{ClassificationResult, Classifier, MATCH_THRESHOLD, NO_MATCH_LABEL};
pub use matcher::{PhraseMatcher, PhraseRef};
pub use score::partial_ratio;
pub use taxonomy::{Category, Taxonomy};
