//! Scripture reference resolution.
//!
//! Maps free-text citations ("Gen 1-3; Psalm 1") to canonical chapter
//! references. Resolution never fails: malformed or unrecognized clauses
//! degrade to an empty result, and calling code treats an empty result as
//! "no readings" rather than an error.

use crate::types::ChapterRef;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Alias -> canonical book id, in definition order.
///
/// Every canonical id appears with at least one alias that is a lowercase
/// prefix of its display name. Aliases are matched case-insensitively
/// against trimmed input.
static BOOK_ALIASES: &[(&str, &str)] = &[
    ("gen", "GEN"), ("genesis", "GEN"),
    ("exo", "EXO"), ("exod", "EXO"), ("exodus", "EXO"), ("ex", "EXO"),
    ("lev", "LEV"), ("leviticus", "LEV"),
    ("num", "NUM"), ("numbers", "NUM"),
    ("deu", "DEU"), ("deut", "DEU"), ("deuteronomy", "DEU"), ("dt", "DEU"),
    ("josh", "JOS"), ("joshua", "JOS"), ("jos", "JOS"),
    ("judg", "JDG"), ("judges", "JDG"), ("jdg", "JDG"),
    ("ruth", "RUT"), ("rut", "RUT"),
    ("1 sam", "1SA"), ("1sam", "1SA"), ("1 samuel", "1SA"),
    ("2 sam", "2SA"), ("2sam", "2SA"), ("2 samuel", "2SA"),
    ("1 kings", "1KI"), ("1kings", "1KI"), ("1 ki", "1KI"), ("1ki", "1KI"), ("1 kgs", "1KI"),
    ("2 kings", "2KI"), ("2kings", "2KI"), ("2 ki", "2KI"), ("2ki", "2KI"), ("2 kgs", "2KI"),
    ("1 chr", "1CH"), ("1chr", "1CH"), ("1 chron", "1CH"), ("1 chronicles", "1CH"),
    ("2 chr", "2CH"), ("2chr", "2CH"), ("2 chron", "2CH"), ("2 chronicles", "2CH"),
    ("ezra", "EZR"), ("ezr", "EZR"),
    ("neh", "NEH"), ("nehemiah", "NEH"),
    ("esth", "EST"), ("esther", "EST"), ("est", "EST"),
    ("job", "JOB"),
    ("ps", "PSA"), ("psa", "PSA"), ("psalm", "PSA"), ("psalms", "PSA"),
    ("prov", "PRO"), ("pro", "PRO"), ("proverbs", "PRO"),
    ("eccl", "ECC"), ("ecc", "ECC"), ("ecclesiastes", "ECC"),
    ("song", "SNG"), ("sng", "SNG"), ("song of solomon", "SNG"),
    ("song of songs", "SNG"), ("sos", "SNG"),
    ("isa", "ISA"), ("isaiah", "ISA"),
    ("jer", "JER"), ("jeremiah", "JER"),
    ("lam", "LAM"), ("lamentations", "LAM"),
    ("ezek", "EZK"), ("ezk", "EZK"), ("ezekiel", "EZK"),
    ("dan", "DAN"), ("daniel", "DAN"),
    ("hos", "HOS"), ("hosea", "HOS"),
    ("joel", "JOL"), ("jol", "JOL"),
    ("amos", "AMO"), ("amo", "AMO"),
    ("obad", "OBA"), ("oba", "OBA"), ("obadiah", "OBA"),
    ("jonah", "JON"), ("jon", "JON"),
    ("mic", "MIC"), ("micah", "MIC"),
    ("nah", "NAM"), ("nam", "NAM"), ("nahum", "NAM"),
    ("hab", "HAB"), ("habakkuk", "HAB"),
    ("zeph", "ZEP"), ("zep", "ZEP"), ("zephaniah", "ZEP"),
    ("hag", "HAG"), ("haggai", "HAG"),
    ("zech", "ZEC"), ("zec", "ZEC"), ("zechariah", "ZEC"),
    ("mal", "MAL"), ("malachi", "MAL"),
    ("matt", "MAT"), ("mat", "MAT"), ("matthew", "MAT"), ("mt", "MAT"),
    ("mark", "MRK"), ("mrk", "MRK"), ("mk", "MRK"),
    ("luke", "LUK"), ("luk", "LUK"), ("lk", "LUK"),
    ("john", "JHN"), ("jhn", "JHN"), ("jn", "JHN"),
    ("acts", "ACT"), ("act", "ACT"),
    ("rom", "ROM"), ("romans", "ROM"),
    ("1 cor", "1CO"), ("1cor", "1CO"), ("1 corinthians", "1CO"),
    ("2 cor", "2CO"), ("2cor", "2CO"), ("2 corinthians", "2CO"),
    ("gal", "GAL"), ("galatians", "GAL"),
    ("eph", "EPH"), ("ephesians", "EPH"),
    ("phil", "PHP"), ("php", "PHP"), ("philippians", "PHP"),
    ("col", "COL"), ("colossians", "COL"),
    ("1 thess", "1TH"), ("1thess", "1TH"), ("1 thessalonians", "1TH"), ("1th", "1TH"),
    ("2 thess", "2TH"), ("2thess", "2TH"), ("2 thessalonians", "2TH"), ("2th", "2TH"),
    ("1 tim", "1TI"), ("1tim", "1TI"), ("1 timothy", "1TI"), ("1ti", "1TI"),
    ("2 tim", "2TI"), ("2tim", "2TI"), ("2 timothy", "2TI"), ("2ti", "2TI"),
    ("titus", "TIT"), ("tit", "TIT"),
    ("philem", "PHM"), ("phm", "PHM"), ("philemon", "PHM"), ("phlm", "PHM"),
    ("heb", "HEB"), ("hebrews", "HEB"),
    ("james", "JAS"), ("jas", "JAS"),
    ("1 pet", "1PE"), ("1pet", "1PE"), ("1 peter", "1PE"), ("1pe", "1PE"),
    ("2 pet", "2PE"), ("2pet", "2PE"), ("2 peter", "2PE"), ("2pe", "2PE"),
    ("1 john", "1JN"), ("1john", "1JN"), ("1jn", "1JN"),
    ("2 john", "2JN"), ("2john", "2JN"), ("2jn", "2JN"),
    ("3 john", "3JN"), ("3john", "3JN"), ("3jn", "3JN"),
    ("jude", "JUD"), ("jud", "JUD"),
    ("rev", "REV"), ("revelation", "REV"), ("revelations", "REV"),
];

/// Canonical book id -> display name (all 66 books).
static BOOK_NAMES: &[(&str, &str)] = &[
    ("GEN", "Genesis"), ("EXO", "Exodus"), ("LEV", "Leviticus"), ("NUM", "Numbers"),
    ("DEU", "Deuteronomy"), ("JOS", "Joshua"), ("JDG", "Judges"), ("RUT", "Ruth"),
    ("1SA", "1 Samuel"), ("2SA", "2 Samuel"), ("1KI", "1 Kings"), ("2KI", "2 Kings"),
    ("1CH", "1 Chronicles"), ("2CH", "2 Chronicles"), ("EZR", "Ezra"), ("NEH", "Nehemiah"),
    ("EST", "Esther"), ("JOB", "Job"), ("PSA", "Psalms"), ("PRO", "Proverbs"),
    ("ECC", "Ecclesiastes"), ("SNG", "Song of Songs"), ("ISA", "Isaiah"), ("JER", "Jeremiah"),
    ("LAM", "Lamentations"), ("EZK", "Ezekiel"), ("DAN", "Daniel"), ("HOS", "Hosea"),
    ("JOL", "Joel"), ("AMO", "Amos"), ("OBA", "Obadiah"), ("JON", "Jonah"),
    ("MIC", "Micah"), ("NAM", "Nahum"), ("HAB", "Habakkuk"), ("ZEP", "Zephaniah"),
    ("HAG", "Haggai"), ("ZEC", "Zechariah"), ("MAL", "Malachi"), ("MAT", "Matthew"),
    ("MRK", "Mark"), ("LUK", "Luke"), ("JHN", "John"), ("ACT", "Acts"),
    ("ROM", "Romans"), ("1CO", "1 Corinthians"), ("2CO", "2 Corinthians"), ("GAL", "Galatians"),
    ("EPH", "Ephesians"), ("PHP", "Philippians"), ("COL", "Colossians"),
    ("1TH", "1 Thessalonians"), ("2TH", "2 Thessalonians"), ("1TI", "1 Timothy"),
    ("2TI", "2 Timothy"), ("TIT", "Titus"), ("PHM", "Philemon"), ("HEB", "Hebrews"),
    ("JAS", "James"), ("1PE", "1 Peter"), ("2PE", "2 Peter"), ("1JN", "1 John"),
    ("2JN", "2 John"), ("3JN", "3 John"), ("JUD", "Jude"), ("REV", "Revelation"),
];

/// Exact-match alias lookup, built once
static ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BOOK_ALIASES.iter().copied().collect());

/// Book id -> display name lookup, built once
static NAME_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BOOK_NAMES.iter().copied().collect());

/// Citation clause pattern: a book token of 1-3 words (the first may carry a
/// leading digit), a start chapter, an ignored verse suffix, and an optional
/// hyphen/en-dash chapter range end.
static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(\d?\s*[A-Za-z]+(?:\s+[A-Za-z]+(?:\s+[A-Za-z]+)?)?)\s+(\d+)(?::[\d-]+)?(?:\s*[-–]\s*(\d+)(?::[\d-]+)?)?",
    )
    .expect("reference regex is valid")
});

/// Resolve a raw book-name token to its canonical 3-letter id
///
/// Exact alias match first, then a prefix fallback where the *longest* alias
/// that is a prefix of the input wins. Longest-match makes the fallback
/// deterministic when several aliases are prefixes of the same input
/// ("1 kings of israel" resolves through "1 kings", not "1 ki").
pub fn resolve_book_id(raw: &str) -> Option<&'static str> {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }

    if let Some(id) = ALIAS_MAP.get(key.as_str()) {
        return Some(id);
    }

    BOOK_ALIASES
        .iter()
        .filter(|(alias, _)| key.starts_with(alias))
        .max_by_key(|(alias, _)| alias.len())
        .map(|(_, id)| *id)
}

/// Display name for a canonical book id, falling back to the id itself
pub fn book_name(book_id: &str) -> &str {
    NAME_MAP.get(book_id).copied().unwrap_or(book_id)
}

/// Parse one citation clause into an inclusive run of chapter references
///
/// Unparseable clauses and unresolvable book tokens yield an empty vec, by
/// design: the caller treats empties as "no readings", never as an error.
/// A descending range ("Genesis 3-1") also yields an empty vec.
pub fn parse_reference(reference: &str) -> Vec<ChapterRef> {
    parse_clause(reference).unwrap_or_default()
}

/// Per-clause parse, kept as an Option internally so future callers can
/// distinguish "skipped" from "empty range" without reworking the boundary.
fn parse_clause(reference: &str) -> Option<Vec<ChapterRef>> {
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return None;
    }

    let caps = REFERENCE_RE.captures(trimmed)?;

    let book_raw = caps.get(1)?.as_str().trim();
    let start: u32 = caps.get(2)?.as_str().parse().ok()?;
    let end: u32 = match caps.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => start,
    };

    let book_id = match resolve_book_id(book_raw) {
        Some(id) => id,
        None => {
            tracing::debug!("Unrecognized book token: {:?}", book_raw);
            return None;
        }
    };
    let name = book_name(book_id);

    let chapters = (start..=end)
        .map(|chapter| ChapterRef {
            book_id: book_id.to_string(),
            book_name: name.to_string(),
            chapter,
            label: format!("{} {}", name, chapter),
        })
        .collect();

    Some(chapters)
}

/// Parse a full citation string into chapter references
///
/// Splits on `,` and `;`, trims and discards empty segments, and
/// concatenates per-clause results in input order. Repeated chapters from
/// overlapping clauses are kept; nothing is deduplicated.
pub fn parse_all_references(references: &str) -> Vec<ChapterRef> {
    references
        .split([',', ';'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .flat_map(parse_reference)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_exact_aliases() {
        assert_eq!(resolve_book_id("genesis"), Some("GEN"));
        assert_eq!(resolve_book_id("Gen"), Some("GEN"));
        assert_eq!(resolve_book_id("  PSALM  "), Some("PSA"));
        assert_eq!(resolve_book_id("1 Kings"), Some("1KI"));
        assert_eq!(resolve_book_id("Jn"), Some("JHN"));
    }

    #[test]
    fn test_resolve_unknown_returns_none() {
        assert_eq!(resolve_book_id("nonexistentbook"), None);
        assert_eq!(resolve_book_id(""), None);
    }

    #[test]
    fn test_resolve_prefix_prefers_longest_alias() {
        // "judgesx" starts with both "jud" (Jude) and "judges" (Judges);
        // the longer alias must win.
        assert_eq!(resolve_book_id("judgesx"), Some("JDG"));
        assert_eq!(resolve_book_id("1 kings of israel"), Some("1KI"));
        assert_eq!(resolve_book_id("psalms of david"), Some("PSA"));
    }

    #[test]
    fn test_every_book_has_a_display_name() {
        for (_, id) in BOOK_ALIASES {
            assert!(
                NAME_MAP.contains_key(id),
                "Alias target {} has no display name",
                id
            );
        }
        assert_eq!(BOOK_NAMES.len(), 66);
    }

    #[test]
    fn test_parse_chapter_range() {
        let refs = parse_reference("Genesis 1-3");
        assert_eq!(refs.len(), 3);
        for (i, r) in refs.iter().enumerate() {
            assert_eq!(r.book_id, "GEN");
            assert_eq!(r.chapter, i as u32 + 1);
            assert_eq!(r.label, format!("Genesis {}", i + 1));
        }
    }

    #[test]
    fn test_parse_single_chapter_uses_display_name() {
        let refs = parse_reference("Psalm 23");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].chapter, 23);
        assert_eq!(refs[0].label, "Psalms 23");
    }

    #[test]
    fn test_parse_verse_suffix_is_ignored() {
        let refs = parse_reference("1 Corinthians 13:4-7");
        assert_eq!(refs.len(), 1);
        assert_eq!(refs[0].book_id, "1CO");
        assert_eq!(refs[0].chapter, 13);
    }

    #[test]
    fn test_parse_en_dash_range() {
        let refs = parse_reference("Exodus 1–2");
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].label, "Exodus 1");
        assert_eq!(refs[1].label, "Exodus 2");
    }

    #[test]
    fn test_parse_malformed_yields_empty() {
        assert!(parse_reference("").is_empty());
        assert!(parse_reference("not a reference").is_empty());
        assert!(parse_reference("12345").is_empty());
        assert!(parse_reference("Unknownbook 3").is_empty());
    }

    #[test]
    fn test_parse_descending_range_yields_empty() {
        assert!(parse_reference("Genesis 3-1").is_empty());
    }

    #[test]
    fn test_parse_all_references_in_order() {
        let refs = parse_all_references("Gen 1-2; Psalm 1");
        let labels: Vec<_> = refs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Genesis 1", "Genesis 2", "Psalms 1"]);
    }

    #[test]
    fn test_parse_all_references_skips_bad_clauses() {
        let refs = parse_all_references("Gen 1, , nonsense, Luke 2");
        let labels: Vec<_> = refs.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Genesis 1", "Luke 2"]);
    }

    #[test]
    fn test_parse_all_references_keeps_duplicates() {
        let refs = parse_all_references("Gen 1; Gen 1-2");
        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].label, "Genesis 1");
        assert_eq!(refs[1].label, "Genesis 1");
    }

    #[test]
    fn test_book_name_fallback() {
        assert_eq!(book_name("GEN"), "Genesis");
        assert_eq!(book_name("XYZ"), "XYZ");
    }
}
