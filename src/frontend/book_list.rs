//! Book list — scrollable cards with a delete button per book.

use egui::{Color32, RichText, Ui};
use rust_i18n::t;

use crate::catalog::{Action, CatalogState};
use crate::types::{Book, BookId};

/// Render the book list
pub fn render(state: &CatalogState, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    // Deferred delete to avoid mutating while iterating
    let mut book_to_delete: Option<BookId> = None;

    if state.books.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(50.0);
            ui.label(t!("catalog_empty"));
        });
    } else {
        egui::ScrollArea::vertical().show(ui, |ui| {
            for book in &state.books {
                render_book_card(ui, book, &mut book_to_delete);
            }
        });
    }

    if let Some(id) = book_to_delete {
        actions.push(Action::DeleteBook(id));
    }

    actions
}

fn render_book_card(ui: &mut Ui, book: &Book, book_to_delete: &mut Option<BookId>) {
    let frame = egui::Frame::new()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .inner_margin(6.0)
        .outer_margin(2.0)
        .corner_radius(4.0);

    frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&book.title).strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(t!("catalog_delete")).clicked() {
                    *book_to_delete = Some(book.id);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!("{}: {}", t!("field_author"), book.author))
                    .small()
                    .color(Color32::GRAY),
            );
            ui.label(RichText::new("│").small().color(Color32::DARK_GRAY));
            ui.label(
                RichText::new(format!("{}: {}", t!("field_genre"), book.genre))
                    .small()
                    .color(Color32::GRAY),
            );
        });
    });
}
