//! Status bar panel — bottom bar showing the book count and active language.

use egui::{RichText, Ui};
use rust_i18n::t;

use crate::catalog::CatalogState;

/// Render the status bar.
pub fn render_status_bar(ui: &mut Ui, state: &CatalogState) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.label(RichText::new(format!("{}: {}", t!("status_books"), state.book_count())).small());

        ui.separator();

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(state.language.display_name()).small());
        });
    });
}
