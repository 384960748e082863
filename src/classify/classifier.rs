use serde::Serialize;
use tracing::debug;

use super::matcher::{PhraseMatcher, PhraseRef};
use super::score::partial_ratio;
use super::taxonomy::Taxonomy;

/// Minimum fuzzy score (inclusive) for a category to be reported.
pub const MATCH_THRESHOLD: f64 = 70.0;

/// Sentinel label when no category clears the threshold.
pub const NO_MATCH_LABEL: &str = "Other - no match found";

/// Outcome of classifying one transcript. Created fresh per request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub category: Option<String>,
    pub score: Option<f64>,
    /// Either `"<category> (fuzzy match: <score>%)"` or the sentinel
    pub label: String,
}

/// Scores a transcript against the taxonomy and applies the decision policy.
///
/// Stateless across requests: each call is a pure computation over the
/// transcript and the (immutable) taxonomy, so one classifier can serve
/// concurrent requests without synchronization.
pub struct Classifier {
    taxonomy: Taxonomy,
    matcher: PhraseMatcher,
}

impl Classifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        let matcher = PhraseMatcher::build(&taxonomy);
        Self { taxonomy, matcher }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Classify a transcript into one appointment-intent category.
    ///
    /// Exact token-boundary matches narrow the candidate set first; only
    /// when nothing matches exactly is every phrase in every category
    /// scored. Ties on the best score go to the pair encountered first in
    /// taxonomy declaration order, and a best score below the threshold
    /// yields the sentinel.
    pub fn classify(&self, transcript: &str) -> ClassificationResult {
        let transcript = transcript.to_lowercase();
        let candidates = self.matcher.find(&transcript);

        let best = if candidates.is_empty() {
            debug!("No exact phrase match; scoring the full taxonomy");
            self.best_scoring(&transcript, self.all_phrases())
        } else {
            debug!("{} candidate phrase(s) matched exactly", candidates.len());
            self.best_scoring(&transcript, candidates.into_iter())
        };

        match best {
            Some((category_index, score)) if score >= MATCH_THRESHOLD => {
                let category = self.taxonomy.categories()[category_index].label.clone();
                ClassificationResult {
                    label: format!("{} (fuzzy match: {}%)", category, score),
                    category: Some(category),
                    score: Some(score),
                }
            }
            _ => ClassificationResult {
                category: None,
                score: None,
                label: NO_MATCH_LABEL.to_string(),
            },
        }
    }

    /// Maximum-score reduction with the first-encountered tie-break: a later
    /// pair replaces the best only on a strictly greater score, so iteration
    /// order (declaration order) decides ties.
    fn best_scoring(
        &self,
        transcript: &str,
        refs: impl Iterator<Item = PhraseRef>,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for phrase_ref in refs {
            let phrase = &self.taxonomy.categories()[phrase_ref.category_index].phrases
                [phrase_ref.phrase_index];
            let score = partial_ratio(transcript, phrase);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((phrase_ref.category_index, score)),
            }
        }
        best
    }

    /// Every phrase position in the taxonomy, in declaration order.
    fn all_phrases(&self) -> impl Iterator<Item = PhraseRef> + '_ {
        self.taxonomy
            .categories()
            .iter()
            .enumerate()
            .flat_map(|(category_index, category)| {
                (0..category.phrases.len()).map(move |phrase_index| PhraseRef {
                    category_index,
                    phrase_index,
                })
            })
    }
}
