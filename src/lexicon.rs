//! Bilingual Strong's lexicon: entries, tables, and load-time indices

use crate::error::ConcordError;
use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Render-time sentinel for absent entry fields.
pub const NA: &str = "N/A";

/// Canonical key shape, also used to pull related keys out of derivation
/// text ("from G1537 and (G2476)").
static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[GH][0-9]+").expect("key pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Greek,
    Hebrew,
}

impl Language {
    pub fn key_prefix(&self) -> char {
        match self {
            Language::Greek => 'G',
            Language::Hebrew => 'H',
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Greek => write!(f, "greek"),
            Language::Hebrew => write!(f, "hebrew"),
        }
    }
}

/// One lexicon entry, immutable after load. Field names follow the source
/// tables; the Hebrew table's `xlit` lands in `translit`. Absent fields
/// stay `None` in storage and default to [`NA`] only when rendered.
#[derive(Debug, Clone, Serialize)]
pub struct LexiconEntry {
    pub key: String,
    pub language: Language,
    pub lemma: Option<String>,
    pub translit: Option<String>,
    pub strongs_def: Option<String>,
    pub kjv_def: Option<String>,
    pub derivation: Option<String>,
}

impl LexiconEntry {
    /// Keys embedded in the derivation text, in occurrence order.
    /// Tolerates punctuation abutting the keys; an absent or key-free
    /// derivation yields an empty list, never an error.
    pub fn related_keys(&self) -> Vec<String> {
        match self.derivation.as_deref() {
            Some(derivation) => KEY_PATTERN
                .find_iter(derivation)
                .map(|m| m.as_str().to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Render-time default for an absent lexicon field.
pub fn or_na(field: Option<&str>) -> &str {
    field.unwrap_or(NA)
}

/// Entry shape as it appears in the JSON tables. The Greek table names
/// its transliteration `translit`, the Hebrew table `xlit`; both may be
/// present on odd entries, in which case `translit` wins.
#[derive(Debug, Deserialize)]
struct RawEntry {
    lemma: Option<String>,
    translit: Option<String>,
    xlit: Option<String>,
    strongs_def: Option<String>,
    kjv_def: Option<String>,
    derivation: Option<String>,
}

/// One language's table: entries in source insertion order, a key map,
/// and a case-folded match index (lowercase lemma and kjv definition to
/// entry positions, in table order).
#[derive(Debug)]
pub struct LexiconTable {
    language: Language,
    entries: Vec<LexiconEntry>,
    by_key: HashMap<String, usize>,
    match_index: HashMap<String, Vec<usize>>,
}

impl LexiconTable {
    fn from_json(json: &str, language: Language) -> Result<Self, ConcordError> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)
            .map_err(|e| ConcordError::Load(format!("{language} table: {e}")))?;

        let mut entries = Vec::with_capacity(raw.len());
        let mut by_key = HashMap::with_capacity(raw.len());
        let mut match_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (key, value) in raw {
            let canonical = canonicalize_key(&key, language)?;
            let raw_entry: RawEntry = serde_json::from_value(value)
                .map_err(|e| ConcordError::Load(format!("{language} entry {canonical}: {e}")))?;

            let idx = entries.len();
            let entry = LexiconEntry {
                key: canonical.clone(),
                language,
                lemma: raw_entry.lemma,
                translit: raw_entry.translit.or(raw_entry.xlit),
                strongs_def: raw_entry.strongs_def,
                kjv_def: raw_entry.kjv_def,
                derivation: raw_entry.derivation,
            };

            for form in [entry.lemma.as_deref(), entry.kjv_def.as_deref()] {
                let folded = match form {
                    Some(form) if !form.is_empty() => form.to_lowercase(),
                    _ => continue,
                };
                let hits = match_index.entry(folded).or_default();
                if hits.last() != Some(&idx) {
                    hits.push(idx);
                }
            }

            by_key.insert(canonical, idx);
            entries.push(entry);
        }

        Ok(Self {
            language,
            entries,
            by_key,
            match_index,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.entries.iter()
    }

    /// Lookup by canonical (uppercase, prefixed) key.
    pub fn get(&self, canonical_key: &str) -> Option<&LexiconEntry> {
        self.by_key.get(canonical_key).map(|&idx| &self.entries[idx])
    }

    /// First entry in table order whose lemma or kjv definition equals
    /// the given lowercase form.
    pub fn exact_match(&self, form: &str) -> Option<&LexiconEntry> {
        self.match_index
            .get(form)
            .and_then(|hits| hits.first())
            .map(|&idx| &self.entries[idx])
    }
}

/// The two tables, loaded once at startup and read-only afterwards.
#[derive(Debug)]
pub struct LexiconStore {
    greek: LexiconTable,
    hebrew: LexiconTable,
}

impl LexiconStore {
    /// Load both tables from JSON files. Either file missing or malformed
    /// fails the whole load; the store never starts half-populated.
    pub fn load(greek_path: &Path, hebrew_path: &Path) -> Result<Self, ConcordError> {
        let greek = read_table(greek_path)?;
        let hebrew = read_table(hebrew_path)?;
        Self::from_json(&greek, &hebrew)
    }

    /// Build a store from raw JSON text, one object per table.
    pub fn from_json(greek: &str, hebrew: &str) -> Result<Self, ConcordError> {
        Ok(Self {
            greek: LexiconTable::from_json(greek, Language::Greek)?,
            hebrew: LexiconTable::from_json(hebrew, Language::Hebrew)?,
        })
    }

    pub fn greek(&self) -> &LexiconTable {
        &self.greek
    }

    pub fn hebrew(&self) -> &LexiconTable {
        &self.hebrew
    }

    pub fn table(&self, language: Language) -> &LexiconTable {
        match language {
            Language::Greek => &self.greek,
            Language::Hebrew => &self.hebrew,
        }
    }

    /// Exact key lookup, case-insensitive, routed to the table matching
    /// the key's prefix. Unprefixed or unknown keys miss.
    pub fn get(&self, key: &str) -> Option<&LexiconEntry> {
        let key = key.trim().to_uppercase();
        match key.chars().next() {
            Some('G') => self.greek.get(&key),
            Some('H') => self.hebrew.get(&key),
            _ => None,
        }
    }

    /// Full iteration over one table in source insertion order.
    pub fn entries(&self, language: Language) -> impl Iterator<Item = &LexiconEntry> {
        self.table(language).entries()
    }
}

/// Uppercase the key and ensure the language prefix: digit-only source
/// keys gain the table's prefix, already-prefixed keys pass through
/// (either prefix, as the source data mixes them), anything else is a
/// load error.
fn canonicalize_key(raw: &str, language: Language) -> Result<String, ConcordError> {
    let key = raw.trim().to_uppercase();
    let (prefixed, digits) = match key.chars().next() {
        Some('G') | Some('H') => (true, &key[1..]),
        Some(_) => (false, key.as_str()),
        None => return Err(ConcordError::Load(format!("{language} table: empty key"))),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConcordError::Load(format!(
            "{language} table: malformed key {raw:?}"
        )));
    }
    if prefixed {
        Ok(key)
    } else {
        Ok(format!("{}{key}", language.key_prefix()))
    }
}

fn read_table(path: &Path) -> Result<String, ConcordError> {
    fs::read_to_string(path).map_err(|e| ConcordError::Load(format!("{}: {e}", path.display())))
}
