// src/lib.rs

pub mod core;
pub mod fuzzy;
pub mod loader;

pub use crate::core::engine::{SearchEngine, SearchHit};
pub use crate::core::normalize::smart_normalize;
pub use crate::core::parser::parse_corpus;
pub use crate::core::scoring::{score_book, score_lecture, score_song};
pub use crate::core::script::{to_display_script, transliterate_for_search};
pub use crate::core::snippet::best_snippet;
pub use crate::core::types::{
    Author, AuthorTable, BookEntry, DisplayScript, LectureEntry, SearchableRecord,
};
pub use crate::fuzzy::matcher::is_fuzzy_match;
