//! Core data types for Bookcase
//!
//! This module contains the fundamental data structures used throughout
//! the application for representing catalog entries.
//!
//! # Main Types
//!
//! - [`BookId`] - Unique identifier assigned to a book when it is created
//! - [`Book`] - A single catalog entry (title, author, genre)
//!
//! # Identity
//!
//! Every [`Book`] receives a fresh v4 UUID at construction. Deletion and
//! list rendering key off that id, so two books with identical field values
//! remain distinguishable entries in the catalog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a book, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookId(Uuid);

impl BookId {
    /// Generate a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry in the catalog
///
/// Plain value record; none of the fields are validated and empty strings
/// are permitted. Books are never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier for this book
    pub id: BookId,

    /// Book title
    pub title: String,

    /// Author name
    pub author: String,

    /// Genre label
    pub genre: String,
}

impl Book {
    /// Create a new book with a freshly generated id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: BookId::new(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}
