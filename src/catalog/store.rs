//! The catalog reducer and the store that owns the current snapshot

use crate::catalog::{Action, CatalogState};

/// Compute the next catalog snapshot for an action
///
/// Pure function over immutable snapshots: the input state is not modified,
/// and the same inputs always produce the same output. It never fails —
/// empty book fields are accepted as-is, and deleting an id that is not
/// present leaves the book sequence unchanged.
pub fn transition(state: &CatalogState, action: Action) -> CatalogState {
    match action {
        Action::AddBook(book) => {
            let mut books = state.books.clone();
            books.push(book);
            CatalogState {
                books,
                language: state.language,
            }
        }
        Action::DeleteBook(id) => CatalogState {
            books: state
                .books
                .iter()
                .filter(|book| book.id != id)
                .cloned()
                .collect(),
            language: state.language,
        },
        Action::SetLanguage(language) => CatalogState {
            books: state.books.clone(),
            language,
        },
    }
}

/// Owns the current catalog snapshot and applies transitions to it
///
/// The application constructs exactly one store and passes it by reference
/// into the view; there is no ambient/global lookup path.
#[derive(Debug, Default)]
pub struct CatalogStore {
    state: CatalogState,
}

impl CatalogStore {
    /// Create a store holding the default snapshot (empty catalog, English)
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Apply an action, replacing the current snapshot
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatching catalog action: {:?}", action);
        self.state = transition(&self.state, action);
    }
}
