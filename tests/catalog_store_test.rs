//! Integration tests for the catalog store
//!
//! These tests exercise the public catalog API the way the UI does:
//! building actions and dispatching them through a store.

use bookcase::{transition, Action, Book, CatalogState, CatalogStore, Language};

#[test]
fn test_initial_state_is_empty_and_english() {
    let store = CatalogStore::new();

    assert!(store.state().books.is_empty());
    assert_eq!(store.state().language, Language::English);
}

#[test]
fn test_add_and_delete_workflow() {
    let mut store = CatalogStore::new();

    let dune = Book::new("Dune", "Frank Herbert", "Science Fiction");
    let hobbit = Book::new("The Hobbit", "J. R. R. Tolkien", "Fantasy");
    let neuromancer = Book::new("Neuromancer", "William Gibson", "Science Fiction");

    store.dispatch(Action::AddBook(dune.clone()));
    store.dispatch(Action::AddBook(hobbit.clone()));
    store.dispatch(Action::AddBook(neuromancer.clone()));

    // Books appear in insertion order
    assert_eq!(store.state().book_count(), 3);
    assert_eq!(store.state().books[0].title, "Dune");
    assert_eq!(store.state().books[1].title, "The Hobbit");
    assert_eq!(store.state().books[2].title, "Neuromancer");

    // Deleting the middle book leaves the others in order
    store.dispatch(Action::DeleteBook(hobbit.id));
    assert_eq!(store.state().book_count(), 2);
    assert_eq!(store.state().books[0].title, "Dune");
    assert_eq!(store.state().books[1].title, "Neuromancer");

    store.dispatch(Action::DeleteBook(dune.id));
    store.dispatch(Action::DeleteBook(neuromancer.id));
    assert!(store.state().books.is_empty());
}

#[test]
fn test_delete_with_stale_id_is_noop() {
    let mut store = CatalogStore::new();

    let book = Book::new("Dune", "Frank Herbert", "Science Fiction");
    store.dispatch(Action::AddBook(book.clone()));
    store.dispatch(Action::DeleteBook(book.id));
    assert!(store.state().books.is_empty());

    // The id no longer exists; deleting again changes nothing
    store.dispatch(Action::DeleteBook(book.id));
    assert!(store.state().books.is_empty());
}

#[test]
fn test_duplicate_books_are_distinct_entries() {
    let mut store = CatalogStore::new();

    let first = Book::new("Dune", "Frank Herbert", "Science Fiction");
    let second = Book::new("Dune", "Frank Herbert", "Science Fiction");
    assert_ne!(first.id, second.id);

    store.dispatch(Action::AddBook(first.clone()));
    store.dispatch(Action::AddBook(second.clone()));
    assert_eq!(store.state().book_count(), 2);

    // Only the targeted copy is removed
    store.dispatch(Action::DeleteBook(first.id));
    assert_eq!(store.state().book_count(), 1);
    assert!(store.state().find_book(first.id).is_none());
    assert_eq!(store.state().find_book(second.id), Some(&second));
}

#[test]
fn test_language_switching_preserves_books() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::AddBook(Book::new(
        "Dune",
        "Frank Herbert",
        "Science Fiction",
    )));

    let books_before = store.state().books.clone();

    store.dispatch(Action::SetLanguage(Language::Japanese));
    assert_eq!(store.state().language, Language::Japanese);
    assert_eq!(store.state().books, books_before);

    store.dispatch(Action::SetLanguage(Language::Spanish));
    assert_eq!(store.state().language, Language::Spanish);

    store.dispatch(Action::SetLanguage(Language::English));
    assert_eq!(store.state().language, Language::English);
    assert_eq!(store.state().books, books_before);
}

#[test]
fn test_set_language_is_idempotent() {
    let mut store = CatalogStore::new();
    store.dispatch(Action::SetLanguage(Language::Spanish));
    let state_after_first = store.state().clone();

    store.dispatch(Action::SetLanguage(Language::Spanish));
    assert_eq!(store.state(), &state_after_first);
}

#[test]
fn test_transition_leaves_input_untouched() {
    let mut state = CatalogState::default();
    state = transition(
        &state,
        Action::AddBook(Book::new("Dune", "Frank Herbert", "Science Fiction")),
    );

    let snapshot = state.clone();
    let _next = transition(&state, Action::SetLanguage(Language::Japanese));
    let _next = transition(&state, Action::DeleteBook(state.books[0].id));

    assert_eq!(state, snapshot);
}
