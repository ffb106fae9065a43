//! Toolbar panel — catalog title, language selector, and preferences button.
//!
//! Sits above the central catalog area.

use egui::Ui;
use rust_i18n::t;

use crate::catalog::{Action, CatalogState};
use crate::i18n::Language;

/// Render the main application toolbar.
///
/// Returns actions to be applied by the app. Selecting a language emits
/// [`Action::SetLanguage`]; the toolbar never mutates the catalog itself.
pub fn render(state: &CatalogState, preferences_open: &mut bool, ui: &mut Ui) -> Vec<Action> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.heading(t!("catalog_title"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            egui::ComboBox::from_id_salt("language_selector")
                .selected_text(state.language.display_name())
                .show_ui(ui, |ui| {
                    for lang in Language::all() {
                        if ui
                            .selectable_label(state.language == *lang, lang.display_name())
                            .clicked()
                            && state.language != *lang
                        {
                            actions.push(Action::SetLanguage(*lang));
                        }
                    }
                });

            if ui.button(t!("toolbar_preferences")).clicked() {
                *preferences_open = true;
            }
        });
    });

    actions
}
