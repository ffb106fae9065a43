//! Add-book form — title, author, and genre inputs with an add button.

use egui::Ui;
use rust_i18n::t;

use crate::catalog::Action;
use crate::types::Book;

/// State for the add-book form
#[derive(Debug, Clone, Default)]
pub struct BookFormState {
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl BookFormState {
    /// Clear all input fields
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.genre.clear();
    }
}

/// Render the add-book form
///
/// Empty fields are accepted; the catalog places no restrictions on
/// book contents. The form is cleared after a book is added.
pub fn render(state: &mut BookFormState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(&mut state.title)
                .hint_text(t!("field_title"))
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.author)
                .hint_text(t!("field_author"))
                .desired_width(160.0),
        );
        ui.add(
            egui::TextEdit::singleline(&mut state.genre)
                .hint_text(t!("field_genre"))
                .desired_width(120.0),
        );

        if ui.button(t!("catalog_add_book")).clicked() {
            actions.push(Action::AddBook(Book::new(
                state.title.clone(),
                state.author.clone(),
                state.genre.clone(),
            )));
            state.clear();
        }
    });

    actions
}
