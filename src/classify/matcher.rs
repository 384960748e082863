use super::taxonomy::Taxonomy;

/// A taxonomy phrase identified by position: category index, then phrase
/// index within that category. Positions follow declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseRef {
    pub category_index: usize,
    pub phrase_index: usize,
}

/// Token-boundary phrase search structure, built once from the taxonomy and
/// reused read-only across requests.
///
/// A phrase matches when its token sequence appears contiguously in the
/// transcript's token sequence. Tokens are lower-cased and stripped of
/// leading/trailing punctuation, so "at 5." still matches a phrase ending
/// in "at 5" while "attery" never matches "battery".
pub struct PhraseMatcher {
    patterns: Vec<(PhraseRef, Vec<String>)>,
}

impl PhraseMatcher {
    pub fn build(taxonomy: &Taxonomy) -> Self {
        let mut patterns = Vec::new();
        for (category_index, category) in taxonomy.categories().iter().enumerate() {
            for (phrase_index, phrase) in category.phrases.iter().enumerate() {
                patterns.push((
                    PhraseRef {
                        category_index,
                        phrase_index,
                    },
                    tokenize(&phrase.to_lowercase()),
                ));
            }
        }
        Self { patterns }
    }

    /// Every (category, phrase) pair occurring at token boundaries in the
    /// transcript, in taxonomy declaration order.
    pub fn find(&self, transcript: &str) -> Vec<PhraseRef> {
        let tokens = tokenize(&transcript.to_lowercase());
        self.patterns
            .iter()
            .filter(|(_, pattern)| contains_sequence(&tokens, pattern))
            .map(|(phrase_ref, _)| *phrase_ref)
            .collect()
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn contains_sequence(haystack: &[String], needle: &[String]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::taxonomy::Category;

    fn matcher(categories: Vec<Category>) -> PhraseMatcher {
        PhraseMatcher::build(&Taxonomy::new(categories))
    }

    #[test]
    fn finds_phrase_at_token_boundaries() {
        let m = matcher(vec![Category::new("time", &["i'll be there at"])]);

        let found = m.find("yes i'll be there at five");
        assert_eq!(
            found,
            vec![PhraseRef {
                category_index: 0,
                phrase_index: 0
            }]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = matcher(vec![Category::new("time", &["i'll be there at"])]);
        assert_eq!(m.find("I'll Be There At noon").len(), 1);
    }

    #[test]
    fn ignores_surrounding_punctuation() {
        let m = matcher(vec![Category::new("info", &["check engine light"])]);
        assert_eq!(m.find("it's the check engine light, again!").len(), 1);
    }

    #[test]
    fn rejects_matches_inside_words() {
        let m = matcher(vec![Category::new("info", &["battery replacement"])]);

        // "attery replacement" is a character-level substring here, but
        // "battery" never appears as a token
        assert!(m.find("the attery replacement went fine").is_empty());
        assert_eq!(m.find("need a battery replacement").len(), 1);
    }

    #[test]
    fn results_follow_declaration_order() {
        let m = matcher(vec![
            Category::new("first", &["alpha", "beta"]),
            Category::new("second", &["gamma"]),
        ]);

        let found = m.find("gamma then beta then alpha");
        let positions: Vec<(usize, usize)> = found
            .iter()
            .map(|r| (r.category_index, r.phrase_index))
            .collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn multiple_categories_can_match() {
        let m = matcher(vec![
            Category::new("a", &["next tuesday"]),
            Category::new("b", &["already booked"]),
        ]);

        assert_eq!(m.find("already booked for next tuesday").len(), 2);
    }

    #[test]
    fn empty_transcript_matches_nothing() {
        let m = matcher(vec![Category::new("a", &["anything"])]);
        assert!(m.find("").is_empty());
    }
}
