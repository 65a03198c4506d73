// File: src/loader.rs
//! File loading for the two external inputs: the raw corpus text and an
//! optional author-table JSON. Everything downstream of here is pure.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::core::types::{Author, AuthorTable};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("author table is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the raw corpus file as UTF-8 text. No validation beyond that:
/// a file that does not follow the delimiter convention parses to zero or
/// partial records downstream.
pub fn load_corpus(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Loads an author table from JSON of the form
/// `{ "<canonical key>": { "name": ..., "name_display_alt": ... }, ... }`.
pub fn load_author_table(path: &Path) -> Result<AuthorTable, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let entries: HashMap<String, Author> = serde_json::from_str(&raw)?;
    Ok(AuthorTable::new(entries))
}
