//! English lemmatization used by the matcher's fallback pass

/// Reduces a word to its dictionary base form. The matcher applies this
/// exactly once, after exact matching has failed in both tables.
pub trait Lemmatizer {
    fn normalize(&self, word: &str) -> String;
}

/// Irregular plurals the suffix rules cannot reduce. Includes the archaic
/// plurals common in the KJV text ("brethren", "kine").
const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("brethren", "brother"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("kine", "cow"),
];

/// Suffix rewrites tried in order; the first applicable rule wins.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("sses", "ss"),
    ("ies", "y"),
    ("shes", "sh"),
    ("ches", "ch"),
    ("xes", "x"),
    ("zes", "z"),
];

/// Rule-based noun lemmatizer for lowercase English words.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishLemmatizer;

impl Lemmatizer for EnglishLemmatizer {
    fn normalize(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some((_, base)) = IRREGULAR_NOUNS.iter().find(|(plural, _)| *plural == word) {
            return (*base).to_string();
        }

        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            if word.len() > suffix.len() && word.ends_with(suffix) {
                let stem = &word[..word.len() - suffix.len()];
                return format!("{stem}{replacement}");
            }
        }

        // Plain plural "s". The guards keep singular forms like "jesus",
        // "basis" and short function words ("his", "was") intact.
        if word.len() > 3
            && word.ends_with('s')
            && !word.ends_with("ss")
            && !word.ends_with("us")
            && !word.ends_with("is")
        {
            return word[..word.len() - 1].to_string();
        }

        word
    }
}
