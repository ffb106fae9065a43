//! Catalog store: state snapshots, actions, and the reducer
//!
//! The catalog follows a unidirectional data flow. The view borrows the
//! current [`CatalogState`] snapshot, renders it, and returns [`Action`]s;
//! the application dispatches those actions through [`CatalogStore`], which
//! replaces the snapshot with the result of the pure [`transition`]
//! function. Nothing in this module performs I/O.
//!
//! # Main Types
//!
//! - [`CatalogState`] - An immutable snapshot of books + current language
//! - [`Action`] - The three requests the view can make
//! - [`CatalogStore`] - Owns the current snapshot and applies transitions

mod action;
mod state;
mod store;

pub use action::Action;
pub use state::CatalogState;
pub use store::{transition, CatalogStore};
