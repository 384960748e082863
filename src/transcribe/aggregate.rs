/// The merged transcript of one call. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    /// Full text as aggregated, interior whitespace untouched
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Text with leading/trailing whitespace stripped, for external
    /// reporting only
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Collects per-segment transcript texts and merges them into one
/// `Transcript`.
///
/// Parts may arrive in any completion order; `finish` re-sorts by sequence
/// index before joining with a single space, so the result is identical to
/// strictly sequential processing. Append-only: nothing is deduplicated or
/// trimmed.
#[derive(Debug, Default)]
pub struct TranscriptAggregator {
    parts: Vec<(usize, String)>,
}

impl TranscriptAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sequence_index: usize, text: String) {
        self.parts.push((sequence_index, text));
    }

    pub fn finish(mut self) -> Transcript {
        self.parts.sort_by_key(|(sequence_index, _)| *sequence_index);
        let text = self
            .parts
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join(" ");
        Transcript { text }
    }
}
