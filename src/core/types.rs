// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A stable identifier for a parsed song record, assigned sequentially at parse time.
pub type RecordId = usize;

/// Which script a caller wants search results rendered in.
///
/// Passed explicitly to the scoring functions and the engine facade; it selects
/// which display string (`title` vs `title_display_alt`, etc.) participates in
/// raw string comparisons and which body the snippet selector scans. The
/// phonetic-normalized comparisons are script independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayScript {
    Devanagari,
    Iast,
}

/// A resolved author attribution: primary (Devanagari) name plus IAST form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    pub name_display_alt: String,
}

/// Known-author lookup table: canonical key fragments (typically short
/// Devanagari name fragments) mapped to their author records.
///
/// Keys are scanned longest-first so a more specific fragment wins over a
/// shorter one it contains (e.g. a full name over a nickname).
#[derive(Debug, Clone, Default)]
pub struct AuthorTable {
    entries: Vec<(String, Author)>,
}

impl AuthorTable {
    pub fn new(entries: impl IntoIterator<Item = (String, Author)>) -> Self {
        let mut entries: Vec<(String, Author)> = entries.into_iter().collect();
        entries.sort_by(|a, b| {
            b.0.chars()
                .count()
                .cmp(&a.0.chars().count())
                .then_with(|| a.0.cmp(&b.0))
        });
        Self { entries }
    }

    /// The built-in table for the shipped corpus. Callers with an external
    /// table load it via `loader::load_author_table` instead.
    pub fn known() -> Self {
        let author = |name: &str, alt: &str| Author {
            name: name.to_string(),
            name_display_alt: alt.to_string(),
        };
        Self::new([
            ("ब्रह्मानन्द".to_string(), author("ब्रह्मानन्द", "Brahmānanda")),
            ("मीरा".to_string(), author("मीरा बाई", "Mīrā Bāī")),
            ("तुलसीदास".to_string(), author("तुलसीदास", "Tulasīdāsa")),
            ("तुलसी".to_string(), author("तुलसीदास", "Tulasīdāsa")),
            ("कबीर".to_string(), author("कबीर", "Kabīra")),
            ("सूरदास".to_string(), author("सूरदास", "Sūradāsa")),
            ("सूर".to_string(), author("सूरदास", "Sūradāsa")),
            ("नरसी".to_string(), author("नरसी मेहता", "Narasī Mehatā")),
        ])
    }

    /// Longest-key-first containment scan of `text`.
    pub fn find_in(&self, text: &str) -> Option<&Author> {
        self.entries
            .iter()
            .find(|(key, _)| text.contains(key.as_str()))
            .map(|(_, author)| author)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One fully parsed song: display strings in both scripts plus the
/// precomputed search fields. Created once per corpus load and treated as
/// immutable afterwards; a corpus reload replaces the whole record list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchableRecord {
    pub id: RecordId,
    pub title: String,
    pub title_display_alt: String,
    pub first_line: String,
    pub first_line_display_alt: String,
    pub body: String,
    pub body_display_alt: String,
    /// Leading numeric token of the raw title block, when present. Uniqueness
    /// is not enforced; duplicates are a data-quality issue, not prevented.
    pub song_number: Option<String>,
    /// Lowercase concatenation of song number + raw title/body + phonetic
    /// title/body. One cheap `.contains()` pre-filter string.
    pub search_index: String,
    /// Deduplicated phonetic tokens (length > 2) from the full text.
    pub search_tokens: HashSet<String>,
    pub author: Option<Author>,
}

/// A downloadable book entry. Built ad hoc by the content collaborator;
/// only the fields its scoring function consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookEntry {
    pub title: String,
    pub title_display_alt: String,
    pub filename: String,
    pub description: String,
}

/// A recorded lecture entry. Dates are exact strings and are never
/// phonetically normalized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LectureEntry {
    pub title: String,
    pub description: String,
    pub date: String,
}
