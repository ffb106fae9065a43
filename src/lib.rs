//! # Bookcase: An In-Memory Book Catalog
//!
//! A small desktop catalog for keeping track of books. All catalog changes
//! flow through a single pure transition function, which makes the state
//! easy to reason about and to test.
//!
//! ## Architecture
//!
//! - **Catalog**: An immutable state value ([`CatalogState`]) advanced by
//!   dispatching [`Action`] values through a [`CatalogStore`]
//! - **Frontend**: Renders the UI using eframe/egui; panels collect actions
//!   instead of mutating state
//! - **I18n**: rust-i18n translations for English, Japanese, and Spanish,
//!   selected at runtime from the toolbar
//!
//! ## Configuration
//!
//! UI preferences (dark mode, font scale) are stored in the
//! platform-appropriate data directory under `bookcase`:
//!
//! - **Linux**: `~/.local/share/bookcase/`
//! - **macOS**: `~/Library/Application Support/bookcase/`
//! - **Windows**: `%APPDATA%\bookcase\`
//!
//! The catalog itself is intentionally not persisted: books and the
//! selected language reset on every start.
//!
//! ## Example
//!
//! ```
//! use bookcase::{Action, CatalogStore, Book};
//!
//! let mut store = CatalogStore::new();
//! store.dispatch(Action::AddBook(Book::new(
//!     "Dune",
//!     "Frank Herbert",
//!     "Science Fiction",
//! )));
//!
//! assert_eq!(store.state().book_count(), 1);
//! ```

rust_i18n::i18n!("locales", fallback = "en");

pub mod catalog;
pub mod config;
pub mod error;
pub mod frontend;
pub mod i18n;
pub mod types;

// Re-export commonly used types
pub use catalog::{transition, Action, CatalogState, CatalogStore};
pub use config::UiPreferences;
pub use error::{CatalogError, Result};
pub use frontend::CatalogApp;
pub use i18n::Language;
pub use types::{Book, BookId};
