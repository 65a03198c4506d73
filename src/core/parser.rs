// src/core/parser.rs
//! Record extraction: flat delimited corpus text to structured song records.
//!
//! Splitting on the delimiter yields `[preamble, title1, body1, title2,
//! body2, ...]`; the preamble is ignored and a dangling trailing title
//! without a body is silently dropped. Parsing is a pure single pass with
//! no recovery paths: a corpus that does not follow the delimiter
//! convention simply yields zero or partial records.

use std::collections::HashSet;

use crate::core::normalize::smart_normalize;
use crate::core::script::{to_display_script, transliterate_for_search};
use crate::core::types::{Author, AuthorTable, SearchableRecord};

/// Segment delimiter alternating title and body blocks.
const SEGMENT_DELIMITER: &str = "###";

/// Canonical verse-end mark; alternate spellings fold to this before the split.
const DOUBLE_DANDA: &str = "\u{0965}";

/// Signature stanzas conventionally sit within the last few body lines.
const AUTHOR_SCAN_LINES: usize = 6;

/// Alternate spelling of one proper name normalized across body text.
const ALT_SPELLING: &str = "क्रिष्ण";
const CANONICAL_SPELLING: &str = "कृष्ण";

const QUOTE_CHARS: [char; 6] = [
    '\'', '"', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}',
];

/// Parses the whole corpus into records, in input order. Safe to re-run on
/// reload; re-parsing is the only update mechanism.
pub fn parse_corpus(raw: &str, authors: &AuthorTable) -> Vec<SearchableRecord> {
    let text = raw.replace("।।", DOUBLE_DANDA).replace("||", DOUBLE_DANDA);
    let segments: Vec<&str> = text.split(SEGMENT_DELIMITER).collect();

    let mut records = Vec::new();
    let mut i = 1;
    while i + 1 < segments.len() {
        if let Some(record) = build_record(records.len(), segments[i], segments[i + 1], authors) {
            records.push(record);
        }
        i += 2;
    }
    records
}

fn build_record(
    id: usize,
    title_block: &str,
    body_block: &str,
    authors: &AuthorTable,
) -> Option<SearchableRecord> {
    let title_block = strip_invisible(title_block);
    let title_block = title_block.trim();

    let song_number = extract_song_number(title_block);
    let title = clean_title(title_block);
    if title.is_empty() {
        return None;
    }

    let body = body_block.trim().replace(ALT_SPELLING, CANONICAL_SPELLING);
    let first_line = body
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(title.as_str())
        .to_string();

    let normalized_title = smart_normalize(&transliterate_for_search(&title));
    let normalized_body = smart_normalize(&transliterate_for_search(&body));
    let search_index = format!(
        "{} {} {} {} {}",
        song_number.as_deref().unwrap_or(""),
        title,
        body,
        normalized_title,
        normalized_body
    )
    .to_lowercase();

    let combined = format!("{} {}", title, body);
    let transliterated = transliterate_for_search(&combined).to_lowercase();
    let mut search_tokens = HashSet::new();
    for token in transliterated.split(is_token_boundary) {
        if token.chars().count() > 2 {
            search_tokens.insert(smart_normalize(token));
        }
    }

    let author = extract_author(&body, authors);

    Some(SearchableRecord {
        id,
        title_display_alt: to_display_script(&title),
        first_line_display_alt: to_display_script(&first_line),
        body_display_alt: to_display_script(&body),
        title,
        first_line,
        body,
        song_number,
        search_index,
        search_tokens,
        author,
    })
}

/// BOM and zero-width characters sneak into title blocks from upstream edits.
fn strip_invisible(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{FEFF}' | '\u{200B}' | '\u{200C}' | '\u{200D}'))
        .collect()
}

/// Leading ASCII digits count as a song number only when a space, period,
/// dash or closing paren follows them.
fn extract_song_number(title_block: &str) -> Option<String> {
    let digits: String = title_block
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return None;
    }
    match title_block[digits.len()..].chars().next() {
        Some(c) if c.is_whitespace() || matches!(c, '.' | '-' | ')') => Some(digits),
        _ => None,
    }
}

/// Strips leading numbering and punctuation noise. Opening brackets stay:
/// titles may legitimately begin with a parenthesized qualifier.
fn clean_title(title_block: &str) -> String {
    title_block
        .trim_start_matches(|c: char| {
            c.is_ascii_digit()
                || ('\u{0966}'..='\u{096F}').contains(&c)
                || c.is_whitespace()
                || matches!(c, '।' | '॥')
                || (c.is_ascii_punctuation() && !matches!(c, '(' | '['))
        })
        .trim()
        .to_string()
}

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || matches!(c, '।' | '॥')
}

/// Best-effort author attribution from the concluding stanza.
///
/// Looks for a quoted span in the last lines first (signature convention),
/// resolving it against the known-author table longest-key-first, falling
/// back to the raw quoted text, then to a plain key scan. Unattributed or
/// unconventionally signed verses simply return `None`.
fn extract_author(body: &str, authors: &AuthorTable) -> Option<Author> {
    let lines: Vec<&str> = body
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let start = lines.len().saturating_sub(AUTHOR_SCAN_LINES);
    let tail = lines[start..].join("\n");

    if let Some(quoted) = first_quoted_span(&tail) {
        if let Some(author) = authors.find_in(quoted) {
            return Some(author.clone());
        }
        let quoted = quoted.trim();
        if !quoted.is_empty() {
            return Some(Author {
                name: quoted.to_string(),
                name_display_alt: to_display_script(quoted),
            });
        }
    }

    authors.find_in(&tail).cloned()
}

fn first_quoted_span(text: &str) -> Option<&str> {
    let open = text.find(&QUOTE_CHARS[..])?;
    let content_start = open + text[open..].chars().next().map_or(1, char::len_utf8);
    let close = text[content_start..].find(&QUOTE_CHARS[..])?;
    Some(&text[content_start..content_start + close])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<SearchableRecord> {
        parse_corpus(raw, &AuthorTable::known())
    }

    #[test]
    fn alternating_segments_become_records() {
        let records = parse("preamble###1. Title One###Body line one\nBody line two###Title Two###Second body###");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 0);
        assert_eq!(records[0].title, "Title One");
        assert_eq!(records[0].song_number.as_deref(), Some("1"));
        assert_eq!(records[0].first_line, "Body line one");
        assert_eq!(records[1].id, 1);
        assert_eq!(records[1].title, "Title Two");
        assert_eq!(records[1].song_number, None);
    }

    #[test]
    fn dangling_trailing_title_is_ignored() {
        let records = parse("###Only Title");
        assert!(records.is_empty());
    }

    #[test]
    fn empty_cleaned_title_skips_the_pair() {
        let records = parse("###12. ---###some body###Real Title###body###");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Real Title");
        // ids stay sequential over emitted records
        assert_eq!(records[0].id, 0);
    }

    #[test]
    fn song_number_requires_following_punctuation() {
        assert_eq!(extract_song_number("12. Title"), Some("12".to_string()));
        assert_eq!(extract_song_number("7) Title"), Some("7".to_string()));
        assert_eq!(extract_song_number("3- Title"), Some("3".to_string()));
        assert_eq!(extract_song_number("4 Title"), Some("4".to_string()));
        assert_eq!(extract_song_number("42"), None);
        assert_eq!(extract_song_number("Title 12"), None);
    }

    #[test]
    fn title_noise_stripped_but_brackets_preserved() {
        assert_eq!(clean_title("12. ## *  Jaya Ho"), "Jaya Ho");
        assert_eq!(clean_title("१२. भजन"), "भजन");
        assert_eq!(clean_title("5. (श्री) गणेश वन्दना"), "(श्री) गणेश वन्दना");
    }

    #[test]
    fn zero_width_and_bom_stripped_from_titles() {
        let records = parse("###\u{FEFF}1. \u{200B}Shanti Path###body###");
        assert_eq!(records[0].title, "Shanti Path");
        assert_eq!(records[0].song_number.as_deref(), Some("1"));
    }

    #[test]
    fn alternate_double_danda_spellings_normalized() {
        let records = parse("###Title###जय राम ।। श्री राम###");
        assert!(records[0].body.contains('\u{0965}'));
        assert!(!records[0].body.contains("।।"));
    }

    #[test]
    fn alternate_krishna_spelling_corrected_in_body() {
        let records = parse("###Title###क्रिष्ण कन्हैया###");
        assert!(records[0].body.starts_with("कृष्ण"));
    }

    #[test]
    fn first_line_falls_back_to_title_for_blank_body() {
        let records = parse("###My Title###   \n  ###");
        assert_eq!(records[0].first_line, "My Title");
    }

    #[test]
    fn display_alt_fields_use_iast() {
        let records = parse("###राम भजन###राम नाम सुखदाई###");
        assert_eq!(records[0].title_display_alt, "rāma bhajana");
        assert_eq!(records[0].first_line_display_alt, "rāma nāma sukhadāī");
    }

    #[test]
    fn search_fields_are_precomputed() {
        let records = parse("###2. Hare Krishna###Hare Krishna Hare Rama###");
        let record = &records[0];
        assert!(record.search_index.contains("2"));
        assert!(record.search_index.contains("hare krishna"));
        // normalized phonetic form is in the index too
        assert!(record.search_index.contains("hare krsn"));
        assert!(record.search_tokens.contains("hare"));
        assert!(record.search_tokens.contains("krsn"));
        // tokens of length <= 2 are dropped before collapsing
        assert!(!record.search_tokens.iter().any(|t| t.is_empty()));
    }

    #[test]
    fn quoted_known_author_resolves_to_canonical_record() {
        let records = parse("###Title###पद गाया\nकहत 'कबीर' सुनो भाई साधो###");
        let author = records[0].author.as_ref().unwrap();
        assert_eq!(author.name, "कबीर");
        assert_eq!(author.name_display_alt, "Kabīra");
    }

    #[test]
    fn quoted_unknown_author_kept_as_raw_text() {
        let records = parse("###Title###अंतिम पंक्ति 'रैदास' कहे###");
        let author = records[0].author.as_ref().unwrap();
        assert_eq!(author.name, "रैदास");
    }

    #[test]
    fn unquoted_author_found_by_key_scan() {
        let records = parse("###Title###मीरा के प्रभु गिरिधर नागर###");
        let author = records[0].author.as_ref().unwrap();
        assert_eq!(author.name, "मीरा बाई");
    }

    #[test]
    fn signature_outside_last_six_lines_is_missed() {
        // documented false-negative: the scan window is the last 6 lines
        let body = "कबीर कहे\nl1\nl2\nl3\nl4\nl5\nl6";
        let corpus = format!("###Title###{}###", body);
        let records = parse(&corpus);
        assert!(records[0].author.is_none());
    }

    #[test]
    fn no_author_returns_none() {
        let records = parse("###Title###कोई हस्ताक्षर नहीं###");
        assert!(records[0].author.is_none());
    }
}
