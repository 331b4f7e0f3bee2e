//! Free-text search over the lexicon tables

use crate::lexicon::{LexiconEntry, LexiconStore, LexiconTable};

/// Hard cap on search results. Entries beyond it are discarded during
/// the scan, not merely hidden.
pub const SEARCH_RESULT_CAP: usize = 10;

const GREEK_FLAG: &str = "-g";
const HEBREW_FLAG: &str = "-h";

/// A parsed search query: the cleaned keyword plus the table-inclusion
/// outcome of the `-g` / `-h` flag tokens. One flag alone restricts the
/// search to that table; both together, or neither, search both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub keyword: String,
    pub greek: bool,
    pub hebrew: bool,
}

impl SearchQuery {
    /// Pull the flag tokens out of the raw keyword; the remaining tokens
    /// rejoin with single spaces.
    pub fn parse(raw: &str) -> Self {
        let mut greek_flag = false;
        let mut hebrew_flag = false;
        let mut words: Vec<&str> = Vec::new();
        for token in raw.split_whitespace() {
            match token {
                GREEK_FLAG => greek_flag = true,
                HEBREW_FLAG => hebrew_flag = true,
                _ => words.push(token),
            }
        }
        SearchQuery {
            keyword: words.join(" "),
            greek: !hebrew_flag || greek_flag,
            hebrew: !greek_flag || hebrew_flag,
        }
    }
}

impl LexiconStore {
    /// Case-insensitive substring search over lemma, transliteration,
    /// definition and kjv definition. Greek scans before Hebrew; within a
    /// table, source insertion order. Stops once [`SEARCH_RESULT_CAP`]
    /// entries have matched. An empty result is a normal outcome.
    pub fn search(&self, query: &SearchQuery) -> Vec<&LexiconEntry> {
        let keyword = query.keyword.to_lowercase();
        let mut results = Vec::new();
        if query.greek {
            collect_matches(self.greek(), &keyword, &mut results);
        }
        if query.hebrew {
            collect_matches(self.hebrew(), &keyword, &mut results);
        }
        results
    }
}

fn collect_matches<'a>(table: &'a LexiconTable, keyword: &str, out: &mut Vec<&'a LexiconEntry>) {
    for entry in table.entries() {
        if out.len() >= SEARCH_RESULT_CAP {
            return;
        }
        if entry_matches(entry, keyword) {
            out.push(entry);
        }
    }
}

fn entry_matches(entry: &LexiconEntry, keyword: &str) -> bool {
    [
        entry.lemma.as_deref(),
        entry.translit.as_deref(),
        entry.strongs_def.as_deref(),
        entry.kjv_def.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(keyword))
}
