// src/fuzzy/matcher.rs
//! Bounded edit-distance matching over normalized tokens.
//!
//! Decides whether two tokens "mean the same word": substring containment
//! short-circuits, then a budgeted Levenshtein comparison, then a
//! same-length-prefix retry so a query can near-miss the start of a longer
//! word (search-as-you-type without exact prefix equality).

/// Sentinel returned when the length gap alone rules a match out.
const DISTANCE_SENTINEL: usize = usize::MAX / 2;

/// Widest length gap the DP bothers with; equals the largest edit budget.
const MAX_LENGTH_GAP: usize = 2;

/// Edit budget by query length: short queries get one edit, longer two.
fn allowed_edits(query_len: usize) -> usize {
    if query_len <= 5 {
        1
    } else {
        2
    }
}

/// Single-row Levenshtein over chars (insert/delete/substitute, unit cost).
///
/// The length-gap guard short-circuits to a sentinel instead of running the
/// O(nm) table; the gap is a lower bound on the distance, so the shortcut
/// can never manufacture a false match.
fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len().abs_diff(b.len()) > MAX_LENGTH_GAP {
        return DISTANCE_SENTINEL;
    }

    let mut dp: Vec<usize> = (0..=b.len()).collect();
    for (i, &ac) in a.iter().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }
    dp[b.len()]
}

/// Does `candidate` fuzzily match `query`?
///
/// Containment always matches. Otherwise queries shorter than 3 chars are
/// rejected as too ambiguous; the rest get a budgeted distance comparison
/// against the full candidate and, when the candidate is longer, against its
/// same-length prefix.
pub fn is_fuzzy_match(candidate: &str, query: &str) -> bool {
    if candidate.contains(query) {
        return true;
    }

    let query_len = query.chars().count();
    if query_len < 3 {
        return false;
    }
    let budget = allowed_edits(query_len);
    let candidate_len = candidate.chars().count();

    // cheap rejection before the DP
    if candidate_len.abs_diff(query_len) <= budget && edit_distance(candidate, query) <= budget {
        return true;
    }

    if candidate_len > query_len {
        let prefix: String = candidate.chars().take(query_len).collect();
        if edit_distance(&prefix, query) <= budget {
            return true;
        }
    }

    false
}
