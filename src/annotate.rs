//! Inline verse annotation with lexicon keys

use crate::matcher::WordMatcher;

/// Punctuation stripped from token edges before matching.
pub const TOKEN_PUNCTUATION: &[char] = &[
    ',', '.', '?', '!', ';', ':', '"', '\'', '[', ']', '(', ')',
];

/// Rewrites a verse so each word with a lexicon hit carries its key
/// inline: `let us love (G25) one another`.
pub struct Annotator<'a> {
    matcher: WordMatcher<'a>,
}

impl<'a> Annotator<'a> {
    pub fn new(matcher: WordMatcher<'a>) -> Self {
        Self { matcher }
    }

    /// Annotate one verse. Tokens split on whitespace runs; punctuation
    /// is stripped for matching only, and a matched token gains ` (key)`
    /// with the original token left intact. Tokens rejoin with single
    /// spaces, so a verse with no hits comes back equal to its
    /// whitespace-normalized input.
    pub fn annotate(&self, verse: &str) -> String {
        let annotated: Vec<String> = verse
            .split_whitespace()
            .map(|token| {
                let clean = token
                    .trim_matches(|c| TOKEN_PUNCTUATION.contains(&c))
                    .to_lowercase();
                match self.matcher.resolve(&clean) {
                    Some(key) => format!("{token} ({key})"),
                    None => token.to_string(),
                }
            })
            .collect();
        annotated.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconStore;

    fn sample_store() -> LexiconStore {
        let greek = r#"{
            "G25": {"lemma": "agapao", "kjv_def": "loved"},
            "G26": {"lemma": "agape", "kjv_def": "love"},
            "G2889": {"lemma": "kosmos", "kjv_def": "world"}
        }"#;
        LexiconStore::from_json(greek, "{}").unwrap()
    }

    fn annotate(store: &LexiconStore, verse: &str) -> String {
        Annotator::new(WordMatcher::new(store)).annotate(verse)
    }

    #[test]
    fn appends_keys_after_matched_tokens() {
        let store = sample_store();
        assert_eq!(
            annotate(&store, "God so loved the world"),
            "God so loved (G25) the world (G2889)"
        );
    }

    #[test]
    fn strips_punctuation_for_matching_but_keeps_it_in_output() {
        let store = sample_store();
        assert_eq!(annotate(&store, "the world,"), "the world, (G2889)");
        assert_eq!(annotate(&store, "\"Love!\""), "\"Love!\" (G26)");
        assert_eq!(annotate(&store, "[world]"), "[world] (G2889)");
    }

    #[test]
    fn unmatched_verse_is_a_no_op() {
        let store = sample_store();
        let verse = "In the beginning was the Word";
        assert_eq!(annotate(&store, verse), verse);
    }

    #[test]
    fn preserves_token_order_and_count_without_matches() {
        let store = LexiconStore::from_json("{}", "{}").unwrap();
        let verse = "And God said, Let there be light: and there was light.";
        let annotated = annotate(&store, verse);
        let input_tokens: Vec<&str> = verse.split_whitespace().collect();
        let output_tokens: Vec<&str> = annotated.split_whitespace().collect();
        assert_eq!(input_tokens, output_tokens);
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let store = sample_store();
        assert_eq!(annotate(&store, "  the   world  "), "the world (G2889)");
    }

    #[test]
    fn punctuation_only_tokens_pass_through() {
        let store = sample_store();
        assert_eq!(annotate(&store, "selah . . ."), "selah . . .");
    }
}
