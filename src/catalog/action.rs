//! Actions the view can emit against the catalog store

use crate::i18n::Language;
use crate::types::{Book, BookId};

/// A discrete request to change the catalog state
///
/// Render functions return these instead of mutating state directly, which
/// keeps the UI testable and the transition logic in one place. The enum is
/// closed, so every action is recognized by the reducer; there is no
/// catch-all identity arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a book to the catalog
    AddBook(Book),

    /// Remove the book with this id
    DeleteBook(BookId),

    /// Switch the catalog language
    SetLanguage(Language),
}
