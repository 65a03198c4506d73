use crate::core::parser::parse_corpus;
use crate::core::scoring::score_song;
use crate::core::snippet::best_snippet;
use crate::core::types::{AuthorTable, DisplayScript, SearchableRecord};
use std::cmp::Reverse;

/// Read-only search facade over a parsed corpus snapshot.
///
/// The record list is replaced wholesale on every corpus load; nothing
/// mutates records in place. Scoring is stateless per record, so callers
/// may fan queries out in parallel if the corpus ever demands it.
pub struct SearchEngine {
    records: Vec<SearchableRecord>,
    authors: AuthorTable,
}

/// One ranked search result.
pub struct SearchHit<'a> {
    pub record: &'a SearchableRecord,
    pub score: u32,
    pub snippet: Option<String>,
}

impl SearchEngine {
    pub fn new(authors: AuthorTable) -> Self {
        Self {
            records: Vec::new(),
            authors,
        }
    }

    /// Engine over the built-in author table, loaded from `raw` immediately.
    pub fn from_corpus(raw: &str) -> Self {
        let mut engine = Self::new(AuthorTable::known());
        engine.load_corpus(raw);
        engine
    }

    /// Re-parsing is the only update mechanism; the previous snapshot is
    /// dropped entirely.
    pub fn load_corpus(&mut self, raw: &str) {
        self.records = parse_corpus(raw, &self.authors);
    }

    pub fn records(&self) -> &[SearchableRecord] {
        &self.records
    }

    /// Scores every record against `query` and returns the top `limit` hits
    /// in descending score order. The sort is stable, so equal scores (and
    /// duplicate song-number hits) keep corpus order. Snippets are computed
    /// only for the returned hits.
    pub fn search(&self, query: &str, script: DisplayScript, limit: usize) -> Vec<SearchHit<'_>> {
        let mut scored: Vec<(u32, &SearchableRecord)> = self
            .records
            .iter()
            .filter_map(|record| {
                let score = score_song(record, query, script);
                (score > 0).then_some((score, record))
            })
            .collect();

        scored.sort_by_key(|&(score, _)| Reverse(score));
        scored.truncate(limit);

        scored
            .into_iter()
            .map(|(score, record)| SearchHit {
                record,
                score,
                snippet: self.snippet_for(record, query, script),
            })
            .collect()
    }

    /// Best preview line of the record's body in the requested script.
    pub fn snippet_for(
        &self,
        record: &SearchableRecord,
        query: &str,
        script: DisplayScript,
    ) -> Option<String> {
        let body = match script {
            DisplayScript::Devanagari => &record.body,
            DisplayScript::Iast => &record.body_display_alt,
        };
        best_snippet(body, query)
    }
}
