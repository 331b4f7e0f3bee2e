//! Scripture reference parsing

use crate::books;
use crate::error::ConcordError;
use serde::Serialize;

/// Annotation flag token; stripped from the raw string wherever it
/// appears and folded into [`ScriptureReference::annotate`].
pub const ANNOTATE_FLAG: &str = "-strongs";

const FORMAT_HINT: &str = "use BOOK CHAPTER:VERSE or BOOK CHAPTER:VERSE-VERSE";

/// A parsed reference: canonical lowercase book name, canon id, chapter,
/// and an inclusive verse range (equal endpoints for a single verse).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptureReference {
    pub book: String,
    pub book_id: i64,
    pub chapter: i64,
    pub verse_start: i64,
    pub verse_end: i64,
    pub annotate: bool,
}

/// Parse `"<book> <chapter>:<verse>[-<verse>]"`, case-insensitive, with
/// the optional annotation flag anywhere in the string. Chapter and verse
/// are not validated against the canon here; out-of-range values fall
/// through to the verse source's per-verse not-found.
pub fn parse_reference(raw: &str) -> Result<ScriptureReference, ConcordError> {
    let annotate = raw.contains(ANNOTATE_FLAG);
    let cleaned = raw.replace(ANNOTATE_FLAG, "");
    let cleaned = cleaned.trim().to_lowercase();

    let (head, chapter_verse) = cleaned
        .rsplit_once(' ')
        .ok_or_else(|| ConcordError::Format(FORMAT_HINT.to_string()))?;
    if !chapter_verse.contains(':') {
        return Err(ConcordError::Format(FORMAT_HINT.to_string()));
    }

    let (book, book_id, rest) = books::match_book_prefix(&cleaned)
        .ok_or_else(|| ConcordError::UnknownBook(head.trim().to_string()))?;

    let (chapter, verse_part) = rest
        .split_once(':')
        .ok_or_else(|| ConcordError::Format(FORMAT_HINT.to_string()))?;
    let (start, end) = match verse_part.split_once('-') {
        Some((start, end)) => (start, end),
        None => (verse_part, verse_part),
    };

    let chapter = parse_number(chapter, "chapter")?;
    let verse_start = parse_number(start, "verse")?;
    let verse_end = parse_number(end, "verse")?;
    if verse_start > verse_end {
        return Err(ConcordError::Format(format!(
            "descending verse range {verse_start}-{verse_end}"
        )));
    }

    Ok(ScriptureReference {
        book: book.to_string(),
        book_id,
        chapter,
        verse_start,
        verse_end,
        annotate,
    })
}

fn parse_number(text: &str, field: &str) -> Result<i64, ConcordError> {
    text.trim()
        .parse()
        .map_err(|_| ConcordError::Format(format!("{field} {text:?} is not a number")))
}
