//! Concord - Strong's lexicon resolution and scripture annotation
//!
//! Library providing reference parsing, keyed lexicon lookup, free-text
//! lexicon search, and inline verse annotation over the bilingual
//! Strong's tables, with KJV verse retrieval from SQLite.

pub mod annotate;
pub mod books;
pub mod error;
pub mod lemma;
pub mod lexicon;
pub mod matcher;
pub mod reference;
pub mod search;
pub mod state;
pub mod verses;

pub use annotate::{Annotator, TOKEN_PUNCTUATION};
pub use error::ConcordError;
pub use lemma::{EnglishLemmatizer, Lemmatizer};
pub use lexicon::{or_na, Language, LexiconEntry, LexiconStore, LexiconTable, NA};
pub use matcher::WordMatcher;
pub use reference::{parse_reference, ScriptureReference, ANNOTATE_FLAG};
pub use search::{SearchQuery, SEARCH_RESULT_CAP};
pub use state::{default_data_dir, AppState, Passage};
pub use verses::{fetch_passage, SqliteVerseSource, Verse, VerseKey, VerseSource};
