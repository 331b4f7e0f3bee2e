//! Verse retrieval: the source trait, the SQLite-backed implementation
//! with LRU caching, and passage assembly

use crate::error::ConcordError;
use crate::reference::ScriptureReference;
use lru::LruCache;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Cache key for one verse.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct VerseKey {
    pub book: i64,
    pub chapter: i64,
    pub verse: i64,
}

impl VerseKey {
    pub fn new(book: i64, chapter: i64, verse: i64) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }
}

/// Read-only verse text provider. `Ok(None)` means the verse does not
/// exist; errors are reserved for the backing store failing.
pub trait VerseSource: Send + Sync {
    fn lookup(&self, book: i64, chapter: i64, verse: i64) -> Result<Option<String>, ConcordError>;
}

/// Verse lookup against the KJV SQLite database, with LRU caching of
/// texts and of not-found outcomes. Opens a short-lived read-only
/// connection per cache miss; the corpus is never written, and a
/// read-write open would create an empty database where the corpus is
/// merely missing.
pub struct SqliteVerseSource {
    db_path: PathBuf,
    cache: Mutex<LruCache<VerseKey, Option<Arc<str>>>>,
}

impl SqliteVerseSource {
    pub fn new(db_path: PathBuf, capacity: usize) -> Self {
        let cache =
            LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1000).unwrap()));
        Self {
            db_path,
            cache: Mutex::new(cache),
        }
    }

    /// (cached verses, capacity)
    pub fn stats(&self) -> (usize, usize) {
        let cache = self.cache.lock().unwrap();
        (cache.len(), cache.cap().get())
    }

    fn query_verse(&self, key: &VerseKey) -> Result<Option<String>, ConcordError> {
        let conn = Connection::open_with_flags(&self.db_path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        conn.query_row(
            "SELECT text FROM verses WHERE book = ?1 AND chapter = ?2 AND verse = ?3",
            rusqlite::params![key.book, key.chapter, key.verse],
            |row| row.get(0),
        )
        .optional()
        .map_err(ConcordError::from)
    }
}

impl VerseSource for SqliteVerseSource {
    fn lookup(&self, book: i64, chapter: i64, verse: i64) -> Result<Option<String>, ConcordError> {
        let key = VerseKey::new(book, chapter, verse);
        {
            let mut cache = self.cache.lock().unwrap();
            if let Some(text) = cache.get(&key) {
                return Ok(text.as_ref().map(|t| t.to_string()));
            }
        }

        let text = self.query_verse(&key)?;
        let cached: Option<Arc<str>> = text.as_deref().map(Arc::from);
        {
            let mut cache = self.cache.lock().unwrap();
            cache.put(key, cached);
        }
        Ok(text)
    }
}

/// One verse slot in a fetched passage; `text` is `None` when the verse
/// is absent from the source.
#[derive(Debug, Clone, Serialize)]
pub struct Verse {
    pub verse: i64,
    pub text: Option<String>,
}

/// Fetch every verse in the reference's range. A verse missing from the
/// source marks its slot `None` and never aborts the rest of the range;
/// only a failing source ends the fetch.
pub fn fetch_passage(
    source: &dyn VerseSource,
    reference: &ScriptureReference,
) -> Result<Vec<Verse>, ConcordError> {
    let mut verses = Vec::new();
    for number in reference.verse_start..=reference.verse_end {
        let text = source.lookup(reference.book_id, reference.chapter, number)?;
        verses.push(Verse {
            verse: number,
            text,
        });
    }
    Ok(verses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::parse_reference;
    use std::path::Path;

    fn seeded_db(dir: &Path) -> PathBuf {
        let path = dir.join("kjv.sqlite");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE verses (book INTEGER, chapter INTEGER, verse INTEGER, text TEXT);
             INSERT INTO verses VALUES (43, 3, 16, 'For God so loved the world');
             INSERT INTO verses VALUES (43, 3, 17, 'For God sent not his Son');
             INSERT INTO verses VALUES (43, 3, 19, 'And this is the condemnation');",
        )
        .unwrap();
        path
    }

    #[test]
    fn lookup_returns_text_for_present_verses() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(seeded_db(dir.path()), 16);
        let text = source.lookup(43, 3, 16).unwrap();
        assert_eq!(text.as_deref(), Some("For God so loved the world"));
    }

    #[test]
    fn lookup_returns_none_for_absent_verses() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(seeded_db(dir.path()), 16);
        assert_eq!(source.lookup(43, 3, 99).unwrap(), None);
        assert_eq!(source.lookup(43, 3, 0).unwrap(), None);
    }

    #[test]
    fn hits_are_served_from_the_cache() {
        let dir = tempfile::tempdir().unwrap();
        let path = seeded_db(dir.path());
        let source = SqliteVerseSource::new(path.clone(), 16);

        assert!(source.lookup(43, 3, 16).unwrap().is_some());
        // With the database gone, only the cache can answer.
        std::fs::remove_file(&path).unwrap();
        assert!(source.lookup(43, 3, 16).unwrap().is_some());
        assert!(source.lookup(43, 3, 17).is_err());
    }

    #[test]
    fn not_found_outcomes_are_cached_too() {
        let dir = tempfile::tempdir().unwrap();
        let path = seeded_db(dir.path());
        let source = SqliteVerseSource::new(path.clone(), 16);

        assert_eq!(source.lookup(43, 3, 18).unwrap(), None);
        let conn = Connection::open(&path).unwrap();
        conn.execute(
            "INSERT INTO verses VALUES (43, 3, 18, 'That light is come into the world')",
            [],
        )
        .unwrap();
        // The stale miss sticks until eviction.
        assert_eq!(source.lookup(43, 3, 18).unwrap(), None);
    }

    #[test]
    fn missing_database_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(dir.path().join("nope.sqlite"), 16);
        assert!(matches!(
            source.lookup(1, 1, 1),
            Err(ConcordError::Database(_))
        ));
    }

    #[test]
    fn stats_reflect_cache_population() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(seeded_db(dir.path()), 16);
        assert_eq!(source.stats(), (0, 16));
        source.lookup(43, 3, 16).unwrap();
        source.lookup(43, 3, 99).unwrap();
        assert_eq!(source.stats(), (2, 16));
    }

    #[test]
    fn fetch_passage_marks_gaps_without_aborting() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(seeded_db(dir.path()), 16);
        let reference = parse_reference("John 3:16-19").unwrap();

        let verses = fetch_passage(&source, &reference).unwrap();
        assert_eq!(verses.len(), 4);
        assert_eq!(verses[0].verse, 16);
        assert!(verses[0].text.is_some());
        assert!(verses[1].text.is_some());
        // Verse 18 is not seeded.
        assert_eq!(verses[2].verse, 18);
        assert!(verses[2].text.is_none());
        assert!(verses[3].text.is_some());
    }

    #[test]
    fn fetch_passage_handles_single_verse_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let source = SqliteVerseSource::new(seeded_db(dir.path()), 16);
        let reference = parse_reference("John 3:16").unwrap();

        let verses = fetch_passage(&source, &reference).unwrap();
        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].verse, 16);
    }
}
