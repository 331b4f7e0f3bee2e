//! Application state: the loaded lexicon, the verse source, and the
//! user-level operations shared by the CLI and the HTTP API

use crate::annotate::Annotator;
use crate::error::ConcordError;
use crate::lexicon::{LexiconEntry, LexiconStore};
use crate::matcher::WordMatcher;
use crate::reference::{parse_reference, ScriptureReference};
use crate::search::SearchQuery;
use crate::verses::{fetch_passage, SqliteVerseSource, Verse};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// Lexicon table files and the verse database, flat in the data dir.
pub const GREEK_LEXICON_FILE: &str = "strongs-greek-dictionary.json";
pub const HEBREW_LEXICON_FILE: &str = "strongs-hebrew-dictionary.json";
pub const VERSE_DB_FILE: &str = "kjv.sqlite";

/// Environment override for the data directory.
pub const DATA_DIR_ENV: &str = "CONCORD_DATA_DIR";

/// Default verse cache capacity (number of verses).
const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Application state holding the lexicon store and verse source.
pub struct AppState {
    pub store: Arc<LexiconStore>,
    pub verses: Arc<SqliteVerseSource>,
    pub data_dir: PathBuf,
}

/// A fetched, optionally annotated, passage.
#[derive(Debug, Clone, Serialize)]
pub struct Passage {
    pub reference: ScriptureReference,
    pub verses: Vec<Verse>,
}

impl AppState {
    /// Load the lexicon tables and wire up the verse source. Lexicon
    /// problems fail construction; the verse database is only opened on
    /// first use.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        let store = LexiconStore::load(
            &data_dir.join(GREEK_LEXICON_FILE),
            &data_dir.join(HEBREW_LEXICON_FILE),
        )
        .with_context(|| format!("loading lexicon tables from {}", data_dir.display()))?;
        let verses = SqliteVerseSource::new(data_dir.join(VERSE_DB_FILE), DEFAULT_CACHE_CAPACITY);

        Ok(Self {
            store: Arc::new(store),
            verses: Arc::new(verses),
            data_dir,
        })
    }

    /// Exact key lookup (`G26`, `h7225`).
    pub fn lookup_entry(&self, key: &str) -> Option<&LexiconEntry> {
        self.store.get(key)
    }

    /// Free-text lexicon search; the raw keyword may carry `-g` / `-h`.
    pub fn search(&self, raw_keyword: &str) -> Vec<&LexiconEntry> {
        self.store.search(&SearchQuery::parse(raw_keyword))
    }

    /// Parse a reference, fetch its verse range, and annotate the found
    /// verses when the `-strongs` flag was present.
    pub fn passage(&self, raw_reference: &str) -> Result<Passage, ConcordError> {
        let reference = parse_reference(raw_reference)?;
        let mut verses = fetch_passage(self.verses.as_ref(), &reference)?;

        if reference.annotate {
            let annotator = Annotator::new(WordMatcher::new(&self.store));
            for verse in &mut verses {
                if let Some(text) = &verse.text {
                    verse.text = Some(annotator.annotate(text));
                }
            }
        }

        Ok(Passage { reference, verses })
    }
}

/// Resolve the data directory: environment override, a local `data`
/// directory, a `data` directory next to the executable, then the
/// platform data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    let local = PathBuf::from("data");
    if local.join(GREEK_LEXICON_FILE).exists() {
        return local;
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let next_to_exe = exe_dir.join("data");
            if next_to_exe.join(GREEK_LEXICON_FILE).exists() {
                return next_to_exe;
            }
        }
    }

    dirs::data_dir()
        .map(|dir| dir.join("concord"))
        .unwrap_or(local)
}
