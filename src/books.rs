//! Protestant-canon book table and name resolution

/// The 66 canonical book names, lowercase, in canon order.
/// A book's id is its 1-based position in this table.
pub const BOOKS: [&str; 66] = [
    "genesis",
    "exodus",
    "leviticus",
    "numbers",
    "deuteronomy",
    "joshua",
    "judges",
    "ruth",
    "1 samuel",
    "2 samuel",
    "1 kings",
    "2 kings",
    "1 chronicles",
    "2 chronicles",
    "ezra",
    "nehemiah",
    "esther",
    "job",
    "psalms",
    "proverbs",
    "ecclesiastes",
    "song of solomon",
    "isaiah",
    "jeremiah",
    "lamentations",
    "ezekiel",
    "daniel",
    "hosea",
    "joel",
    "amos",
    "obadiah",
    "jonah",
    "micah",
    "nahum",
    "habakkuk",
    "zephaniah",
    "haggai",
    "zechariah",
    "malachi",
    "matthew",
    "mark",
    "luke",
    "john",
    "acts",
    "romans",
    "1 corinthians",
    "2 corinthians",
    "galatians",
    "ephesians",
    "philippians",
    "colossians",
    "1 thessalonians",
    "2 thessalonians",
    "1 timothy",
    "2 timothy",
    "titus",
    "philemon",
    "hebrews",
    "james",
    "1 peter",
    "2 peter",
    "1 john",
    "2 john",
    "3 john",
    "jude",
    "revelation",
];

/// Resolve a book name (case-insensitive) to its canon id.
pub fn book_id(name: &str) -> Option<i64> {
    let name = name.trim();
    BOOKS
        .iter()
        .position(|b| b.eq_ignore_ascii_case(name))
        .map(|idx| idx as i64 + 1)
}

/// Canonical lowercase name for a canon id.
pub fn book_name(id: i64) -> Option<&'static str> {
    if id < 1 || id > BOOKS.len() as i64 {
        return None;
    }
    Some(BOOKS[(id - 1) as usize])
}

/// Match a table name at the start of `reference`, requiring a space after
/// the name so that multi-word books ("1 samuel", "song of solomon") are
/// recognized as a whole. Expects lowercase input. Returns the canonical
/// name, its id, and the remainder after the separator.
pub fn match_book_prefix(reference: &str) -> Option<(&'static str, i64, &str)> {
    for (idx, name) in BOOKS.iter().enumerate() {
        if reference.len() > name.len()
            && reference.starts_with(name)
            && reference.as_bytes()[name.len()] == b' '
        {
            let rest = reference[name.len()..].trim_start();
            return Some((name, idx as i64 + 1, rest));
        }
    }
    None
}
