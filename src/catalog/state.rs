//! The catalog state snapshot

use serde::{Deserialize, Serialize};

use crate::i18n::Language;
use crate::types::{Book, BookId};

/// One immutable snapshot of the catalog
///
/// A snapshot is produced by a transition and consumed by the next render;
/// it is replaced, never mutated in place. The default snapshot is an empty
/// catalog in English.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogState {
    /// Books in insertion order; duplicates by field value are permitted
    pub books: Vec<Book>,

    /// Language used for label lookups in the view
    pub language: Language,
}

impl CatalogState {
    /// Number of books in the catalog
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Look up a book by id
    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }
}
