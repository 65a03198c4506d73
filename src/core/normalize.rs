// src/core/normalize.rs
//! Latin-to-Latin phonetic canonicalization.
//!
//! Applied after transliteration, this collapses the many ways a Hindi or
//! Sanskrit word gets spelled in Latin script (`Krishna`/`Krisna`/`Krushna`)
//! towards one canonical token. The rules are ordered and later rules see
//! the output of earlier ones; re-applying the whole pipeline is NOT
//! guaranteed to be a no-op.

/// Vowel digraph folds, run first.
const VOWEL_FOLDS: [(&str, &str); 7] = [
    ("aa", "a"),
    ("ae", "e"),
    ("ai", "e"),
    ("ee", "i"),
    ("oo", "u"),
    ("au", "o"),
    ("ou", "o"),
];

/// Consonant substitutions, run on the vowel-folded text.
const CONSONANT_FOLDS: [(&str, &str); 7] = [
    ("v", "b"),
    ("w", "b"),
    ("sh", "s"),
    ("z", "j"),
    ("ph", "f"),
    ("ri", "r"),
    ("ru", "r"),
];

fn is_ascii_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Collapses phonetic spelling variance in already-Latinized text.
///
/// Rule order: lowercase, vowel folds, consonant folds, doubled-consonant
/// collapse, single trailing `a` strip, whitespace collapse + trim.
/// Deterministic and total; lossy by design (distinct short words can
/// converge on the same output).
pub fn smart_normalize(text: &str) -> String {
    let mut s = text.to_lowercase();
    for (pattern, replacement) in VOWEL_FOLDS {
        s = s.replace(pattern, replacement);
    }
    for (pattern, replacement) in CONSONANT_FOLDS {
        s = s.replace(pattern, replacement);
    }

    let mut collapsed = String::with_capacity(s.len());
    let mut prev = None;
    for c in s.chars() {
        if prev == Some(c) && c.is_ascii_alphabetic() && !is_ascii_vowel(c) {
            continue;
        }
        collapsed.push(c);
        prev = Some(c);
    }

    if collapsed.len() > 1 && collapsed.ends_with('a') {
        collapsed.pop();
    }

    collapsed.split_whitespace().collect::<Vec<_>>().join(" ")
}
