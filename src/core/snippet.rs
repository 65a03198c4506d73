// src/core/snippet.rs
//! Picks the single best-matching line of a body for result previews.

use crate::core::normalize::smart_normalize;
use crate::core::script::transliterate_for_search;
use crate::fuzzy::matcher::is_fuzzy_match;

const RAW_SUBSTRING_SCORE: u32 = 100;
const NORMALIZED_SUBSTRING_SCORE: u32 = 80;
const TOKEN_OVERLAP_BASE: u32 = 50;
const TOKEN_OVERLAP_SPAN: u32 = 20;

/// Returns the trimmed body line that best matches the query, or `None`
/// when the query is shorter than 2 chars or no line scores above zero.
/// Lines score 100 for a raw substring hit, 80 for a normalized substring
/// hit, else 50..=70 proportional to the fraction of query terms fuzzily
/// found among the line's tokens. The first line wins ties.
pub fn best_snippet(body: &str, raw_query: &str) -> Option<String> {
    let raw = raw_query.trim().to_lowercase();
    if raw.chars().count() < 2 {
        return None;
    }
    let normalized = smart_normalize(&transliterate_for_search(&raw));
    let terms: Vec<&str> = normalized.split_whitespace().collect();

    let mut best: Option<&str> = None;
    let mut best_score = 0;

    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let score = score_line(line, &raw, &normalized, &terms);
        // strictly greater: earlier lines win ties
        if score > best_score {
            best_score = score;
            best = Some(line);
        }
    }

    best.map(str::to_string)
}

fn score_line(line: &str, raw: &str, normalized: &str, terms: &[&str]) -> u32 {
    let lowered = line.to_lowercase();
    if lowered.contains(raw) {
        return RAW_SUBSTRING_SCORE;
    }

    let normalized_line = smart_normalize(&transliterate_for_search(&lowered));
    if normalized_line.contains(normalized) {
        return NORMALIZED_SUBSTRING_SCORE;
    }

    if terms.is_empty() {
        return 0;
    }
    let matched = terms
        .iter()
        .filter(|term| {
            normalized_line
                .split_whitespace()
                .any(|token| is_fuzzy_match(token, term))
        })
        .count() as u32;
    if matched == 0 {
        return 0;
    }
    let total = terms.len() as u32;
    TOKEN_OVERLAP_BASE + (matched * TOKEN_OVERLAP_SPAN / total).min(TOKEN_OVERLAP_SPAN)
}
