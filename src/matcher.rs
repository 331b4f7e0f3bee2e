//! Word-to-key resolution with lemmatized fallback

use crate::lemma::{EnglishLemmatizer, Lemmatizer};
use crate::lexicon::LexiconStore;

static DEFAULT_LEMMATIZER: EnglishLemmatizer = EnglishLemmatizer;

/// Resolves one cleaned word to a lexicon key. Exact matches run before
/// lemmatized matches and Greek runs before Hebrew in both passes, so a
/// word landing in several tables resolves deterministically. Carries no
/// state of its own; borrows the store and a lemmatizer.
pub struct WordMatcher<'a> {
    store: &'a LexiconStore,
    lemmatizer: &'a dyn Lemmatizer,
}

impl<'a> WordMatcher<'a> {
    pub fn new(store: &'a LexiconStore) -> Self {
        Self::with_lemmatizer(store, &DEFAULT_LEMMATIZER)
    }

    pub fn with_lemmatizer(store: &'a LexiconStore, lemmatizer: &'a dyn Lemmatizer) -> Self {
        Self { store, lemmatizer }
    }

    /// Resolve a word to its canonical lexicon key. Callers pass cleaned
    /// words; case is folded here again regardless. The lemmatizer is
    /// applied at most once, and only after both exact passes miss.
    pub fn resolve(&self, word: &str) -> Option<&'a str> {
        let word = word.to_lowercase();
        if word.is_empty() {
            return None;
        }
        if let Some(key) = self.exact(&word) {
            return Some(key);
        }
        let base = self.lemmatizer.normalize(&word);
        if base == word {
            return None;
        }
        self.exact(&base)
    }

    fn exact(&self, form: &str) -> Option<&'a str> {
        self.store
            .greek()
            .exact_match(form)
            .or_else(|| self.store.hebrew().exact_match(form))
            .map(|entry| entry.key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> LexiconStore {
        let greek = r#"{
            "G26": {"lemma": "agape", "strongs_def": "love, i.e. affection", "kjv_def": "love"},
            "G2316": {"lemma": "theos", "strongs_def": "a deity", "kjv_def": "god"},
            "G5207": {"lemma": "huios", "kjv_def": "son"}
        }"#;
        let hebrew = r#"{
            "H157": {"lemma": "ahab", "strongs_def": "to have affection for", "kjv_def": "love"},
            "H430": {"lemma": "elohiym", "kjv_def": "god"},
            "H1121": {"lemma": "ben", "kjv_def": "sons"}
        }"#;
        LexiconStore::from_json(greek, hebrew).unwrap()
    }

    #[test]
    fn exact_match_resolves_through_kjv_definition() {
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("love"), Some("G26"));
    }

    #[test]
    fn resolve_folds_case_and_is_idempotent() {
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("Love"), Some("G26"));
        assert_eq!(matcher.resolve("Love"), matcher.resolve("love"));
    }

    #[test]
    fn greek_wins_over_hebrew_in_the_exact_pass() {
        // "god" is a kjv definition in both tables.
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("god"), Some("G2316"));
    }

    #[test]
    fn lemmatized_fallback_fires_after_both_exact_passes() {
        // "sons" exact-matches Hebrew H1121; the lemmatized Greek match
        // ("son" -> G5207) must not preempt it.
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("sons"), Some("H1121"));
    }

    #[test]
    fn lemmatized_greek_precedes_lemmatized_hebrew() {
        // "gods" matches nothing exactly; its base form "god" is in both
        // tables and must resolve Greek.
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("gods"), Some("G2316"));
    }

    #[test]
    fn lemmatized_fallback_resolves_plurals() {
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("loves"), Some("G26"));
    }

    #[test]
    fn unmatched_words_return_none() {
        let store = sample_store();
        let matcher = WordMatcher::new(&store);
        assert_eq!(matcher.resolve("xylophone"), None);
        assert_eq!(matcher.resolve(""), None);
    }

    #[test]
    fn lemmatizer_is_swappable() {
        struct FixedBase;
        impl Lemmatizer for FixedBase {
            fn normalize(&self, _word: &str) -> String {
                "agape".to_string()
            }
        }

        let store = sample_store();
        let matcher = WordMatcher::with_lemmatizer(&store, &FixedBase);
        // Exact pass misses, the stubbed base form hits the Greek lemma.
        assert_eq!(matcher.resolve("anything"), Some("G26"));
        // Exact pass still runs first.
        assert_eq!(matcher.resolve("god"), Some("G2316"));
    }
}
