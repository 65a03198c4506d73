// src/core/scoring.rs
//! Multi-signal relevance scoring for songs, books and lectures.
//!
//! Scores are ordinal: 0 means "not a match, exclude", larger means more
//! relevant, and nothing is normalized to a fixed range. The two exact tiers
//! sit an order of magnitude above any realistic additive sum so an exact
//! identifier or title always outranks an accumulation of weaker signals.

use crate::core::normalize::smart_normalize;
use crate::core::script::transliterate_for_search;
use crate::core::types::{BookEntry, DisplayScript, LectureEntry, SearchableRecord};
use crate::fuzzy::matcher::is_fuzzy_match;

/// Exact song-number match. Highest tier, short-circuits everything.
pub const SONG_NUMBER_EXACT: u32 = 2000;
/// Exact title match (raw or normalized form). Short-circuits the sum.
pub const TITLE_EXACT: u32 = 1000;
/// Title starts with the query (raw or normalized).
pub const TITLE_PREFIX: u32 = 500;
/// Title contains the query (raw or normalized).
pub const TITLE_CONTAINS: u32 = 200;
/// Per distinct query term fuzzy-matching a title token.
pub const TITLE_TERM_FUZZY: u32 = 50;
/// Body/description/index contains the raw query.
pub const BODY_CONTAINS: u32 = 100;
/// Per distinct query term fuzzy-matching the precomputed token set.
pub const TOKEN_TERM_FUZZY: u32 = 10;
/// Lecture date contains the query literally (dates are never normalized).
pub const LECTURE_DATE_CONTAINS: u32 = 300;
/// Book filename contains the raw query.
pub const BOOK_FILENAME_CONTAINS: u32 = 100;

/// A query prepared once per scoring pass: the lowercased trimmed raw form,
/// the transliterated-then-collapsed form, and the distinct normalized terms.
/// Transient by design; it has no identity beyond one pass.
pub struct Query {
    pub raw: String,
    pub normalized: String,
    pub terms: Vec<String>,
}

impl Query {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(raw_query: &str) -> Option<Self> {
        let raw = raw_query.trim().to_lowercase();
        if raw.is_empty() {
            return None;
        }
        let normalized = smart_normalize(&transliterate_for_search(&raw));
        let mut terms: Vec<String> = Vec::new();
        for term in normalized.split_whitespace() {
            if !terms.iter().any(|t| t == term) {
                terms.push(term.to_string());
            }
        }
        Some(Self {
            raw,
            normalized,
            terms,
        })
    }
}

enum TitleMatch {
    Exact,
    Partial(u32),
}

/// Title signals shared by every entity kind. `raw_title` must already be
/// lowercased; `normalized_title` is the collapsed phonetic form.
fn match_title(raw_title: &str, normalized_title: &str, query: &Query) -> TitleMatch {
    if query.raw == raw_title || query.normalized == normalized_title {
        return TitleMatch::Exact;
    }

    let mut score = 0;
    if raw_title.starts_with(&query.raw) || normalized_title.starts_with(&query.normalized) {
        score += TITLE_PREFIX;
    }
    if raw_title.contains(&query.raw) || normalized_title.contains(&query.normalized) {
        score += TITLE_CONTAINS;
    }
    for term in &query.terms {
        if normalized_title
            .split_whitespace()
            .any(|token| is_fuzzy_match(token, term))
        {
            score += TITLE_TERM_FUZZY;
        }
    }
    TitleMatch::Partial(score)
}

fn raw_form(script: DisplayScript, primary: &str, alt: &str) -> String {
    match script {
        DisplayScript::Devanagari => primary.to_lowercase(),
        DisplayScript::Iast => alt.to_lowercase(),
    }
}

/// Scores one song record against a free-text query.
pub fn score_song(record: &SearchableRecord, raw_query: &str, script: DisplayScript) -> u32 {
    let query = match Query::parse(raw_query) {
        Some(q) => q,
        None => return 0,
    };

    if record.song_number.as_deref() == Some(query.raw.as_str()) {
        return SONG_NUMBER_EXACT;
    }

    let raw_title = raw_form(script, &record.title, &record.title_display_alt);
    let normalized_title = smart_normalize(&transliterate_for_search(&record.title));

    let mut score = match match_title(&raw_title, &normalized_title, &query) {
        TitleMatch::Exact => return TITLE_EXACT,
        TitleMatch::Partial(partial) => partial,
    };

    if record.search_index.contains(&query.raw) {
        score += BODY_CONTAINS;
    }
    for term in &query.terms {
        if record
            .search_tokens
            .iter()
            .any(|token| is_fuzzy_match(token, term))
        {
            score += TOKEN_TERM_FUZZY;
        }
    }

    score
}

/// Scores one book entry against a free-text query.
pub fn score_book(book: &BookEntry, raw_query: &str, script: DisplayScript) -> u32 {
    let query = match Query::parse(raw_query) {
        Some(q) => q,
        None => return 0,
    };

    let raw_title = raw_form(script, &book.title, &book.title_display_alt);
    let normalized_title = smart_normalize(&transliterate_for_search(&book.title));

    let mut score = match match_title(&raw_title, &normalized_title, &query) {
        TitleMatch::Exact => return TITLE_EXACT,
        TitleMatch::Partial(partial) => partial,
    };

    if book.description.to_lowercase().contains(&query.raw) {
        score += BODY_CONTAINS;
    }
    if book.filename.to_lowercase().contains(&query.raw) {
        score += BOOK_FILENAME_CONTAINS;
    }

    score
}

/// Scores one lecture entry against a free-text query.
pub fn score_lecture(lecture: &LectureEntry, raw_query: &str) -> u32 {
    let query = match Query::parse(raw_query) {
        Some(q) => q,
        None => return 0,
    };

    let raw_title = lecture.title.to_lowercase();
    let normalized_title = smart_normalize(&transliterate_for_search(&lecture.title));

    let mut score = match match_title(&raw_title, &normalized_title, &query) {
        TitleMatch::Exact => return TITLE_EXACT,
        TitleMatch::Partial(partial) => partial,
    };

    let description = lecture.description.to_lowercase();
    if description.contains(&query.raw) {
        score += BODY_CONTAINS;
    }
    if lecture.date.contains(&query.raw) {
        score += LECTURE_DATE_CONTAINS;
    }
    let normalized_description = smart_normalize(&transliterate_for_search(&description));
    for term in &query.terms {
        if normalized_description
            .split_whitespace()
            .any(|token| is_fuzzy_match(token, term))
        {
            score += TOKEN_TERM_FUZZY;
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(title: &str, body: &str, number: Option<&str>) -> SearchableRecord {
        let combined = format!("{} {}", title, body);
        let normalized = smart_normalize(&transliterate_for_search(&combined));
        let search_index = format!(
            "{} {} {}",
            number.unwrap_or(""),
            combined,
            normalized
        )
        .to_lowercase();
        let search_tokens: HashSet<String> = normalized
            .split_whitespace()
            .map(str::to_string)
            .collect();
        SearchableRecord {
            id: 0,
            title: title.to_string(),
            title_display_alt: title.to_string(),
            first_line: body.lines().next().unwrap_or(title).to_string(),
            first_line_display_alt: String::new(),
            body: body.to_string(),
            body_display_alt: body.to_string(),
            song_number: number.map(str::to_string),
            search_index,
            search_tokens,
            author: None,
        }
    }

    #[test]
    fn empty_query_scores_zero() {
        let r = record("Hare Krishna", "some body", Some("3"));
        assert_eq!(score_song(&r, "", DisplayScript::Devanagari), 0);
        assert_eq!(score_song(&r, "   \t", DisplayScript::Devanagari), 0);
    }

    #[test]
    fn song_number_short_circuits_everything() {
        let r = record("Completely Unrelated Title", "body text", Some("42"));
        assert_eq!(score_song(&r, "42", DisplayScript::Devanagari), SONG_NUMBER_EXACT);
        assert_eq!(score_song(&r, " 42 ", DisplayScript::Iast), SONG_NUMBER_EXACT);
    }

    #[test]
    fn exact_title_is_second_tier() {
        let r = record("Hare Krishna", "body", None);
        assert_eq!(score_song(&r, "hare krishna", DisplayScript::Devanagari), TITLE_EXACT);
        // exact in normalized form counts too
        assert_eq!(score_song(&r, "Hare Krisna", DisplayScript::Devanagari), TITLE_EXACT);
    }

    #[test]
    fn exact_title_beats_any_partial_accumulation() {
        let exact = record("Raghupati Raghav", "x", None);
        let partial = record(
            "Raghupati Raghav Raja Ram",
            "raghupati raghav everywhere in the body",
            None,
        );
        let query = "raghupati raghav";
        let exact_score = score_song(&exact, query, DisplayScript::Devanagari);
        let partial_score = score_song(&partial, query, DisplayScript::Devanagari);
        assert_eq!(exact_score, TITLE_EXACT);
        assert!(partial_score > 0);
        assert!(
            exact_score > partial_score,
            "partial {} must stay below exact tier",
            partial_score
        );
    }

    #[test]
    fn prefix_and_contains_accumulate() {
        let r = record("Raghupati Raghav", "Raja Ram", None);
        let score = score_song(&r, "raghupati", DisplayScript::Devanagari);
        // prefix + contains + title term + index + token term
        assert_eq!(
            score,
            TITLE_PREFIX + TITLE_CONTAINS + TITLE_TERM_FUZZY + BODY_CONTAINS + TOKEN_TERM_FUZZY
        );
    }

    #[test]
    fn body_only_match_scores_low_but_nonzero() {
        let r = record("Some Title", "the word gopala appears here", None);
        let score = score_song(&r, "gopala", DisplayScript::Devanagari);
        assert!(score >= BODY_CONTAINS);
        assert!(score < TITLE_CONTAINS + BODY_CONTAINS + TOKEN_TERM_FUZZY);
    }

    #[test]
    fn no_signal_scores_zero() {
        let r = record("Hare Krishna", "mana bhajo", None);
        assert_eq!(score_song(&r, "qwxyz", DisplayScript::Devanagari), 0);
    }

    #[test]
    fn book_filename_contributes() {
        let book = BookEntry {
            title: "Bhajanamrita".to_string(),
            title_display_alt: "Bhajanāmṛta".to_string(),
            filename: "bhajanamrita_vol1.pdf".to_string(),
            description: "collected verses".to_string(),
        };
        let with_file = score_book(&book, "vol1", DisplayScript::Devanagari);
        assert_eq!(with_file, BOOK_FILENAME_CONTAINS);
        assert_eq!(score_book(&book, "verses", DisplayScript::Devanagari), BODY_CONTAINS);
    }

    #[test]
    fn lecture_date_is_literal() {
        let lecture = LectureEntry {
            title: "Morning discourse".to_string(),
            description: "on seva and surrender".to_string(),
            date: "2019-03-14".to_string(),
        };
        let score = score_lecture(&lecture, "2019-03");
        assert_eq!(score, LECTURE_DATE_CONTAINS);
        assert_eq!(score_lecture(&lecture, "surrender"), BODY_CONTAINS + TOKEN_TERM_FUZZY);
    }

    #[test]
    fn query_terms_are_deduplicated() {
        let q = Query::parse("hare hare hare").unwrap();
        assert_eq!(q.terms, vec!["hare".to_string()]);
    }
}
