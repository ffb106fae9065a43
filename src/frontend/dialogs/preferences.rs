//! Preferences dialog
//!
//! App-wide appearance settings: dark mode and font scale. The catalog
//! language is not part of preferences; it is switched from the toolbar
//! and resets to English on restart.

use egui::Ui;
use rust_i18n::t;

use crate::config::UiPreferences;
use crate::frontend::dialogs::{Dialog, DialogAction, DialogState, DialogWindowConfig};

/// State for the preferences dialog
#[derive(Debug, Clone)]
pub struct PreferencesState {
    pub dark_mode: bool,
    pub font_scale: f32,
}

impl Default for PreferencesState {
    fn default() -> Self {
        let prefs = UiPreferences::default();
        Self {
            dark_mode: prefs.dark_mode,
            font_scale: prefs.font_scale,
        }
    }
}

impl PreferencesState {
    /// Create from the current preferences
    pub fn from_prefs(prefs: &UiPreferences) -> Self {
        Self {
            dark_mode: prefs.dark_mode,
            font_scale: prefs.font_scale,
        }
    }
}

impl DialogState for PreferencesState {}

/// Actions produced by the preferences dialog
#[derive(Debug, Clone)]
pub enum PreferencesAction {
    /// Apply preferences
    Apply(PreferencesState),
}

/// Context for rendering
pub struct PreferencesContext;

/// The preferences dialog
pub struct PreferencesDialog;

impl Dialog for PreferencesDialog {
    type State = PreferencesState;
    type Action = PreferencesAction;
    type Context<'a> = PreferencesContext;

    fn title(_state: &Self::State) -> &'static str {
        // Note: Can't use t!() here as it returns String, not &'static str
        "Preferences"
    }

    fn window_config() -> DialogWindowConfig {
        DialogWindowConfig {
            default_width: 320.0,
            resizable: false,
            ..Default::default()
        }
    }

    fn render(
        state: &mut Self::State,
        _ctx: Self::Context<'_>,
        ui: &mut Ui,
    ) -> DialogAction<Self::Action> {
        ui.heading(t!("pref_appearance"));
        ui.add_space(4.0);

        egui::Grid::new("prefs_appearance_grid")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label(format!("{}:", t!("pref_dark_mode")));
                ui.checkbox(&mut state.dark_mode, "");
                ui.end_row();

                ui.label(format!("{}:", t!("pref_font_scale")));
                ui.add(egui::Slider::new(&mut state.font_scale, 0.5..=2.0).step_by(0.1));
                ui.end_row();
            });

        ui.add_space(8.0);
        ui.separator();
        ui.horizontal(|ui| {
            if ui.button(t!("dialog_apply")).clicked() {
                return DialogAction::CloseWithAction(PreferencesAction::Apply(state.clone()));
            }
            if ui.button(t!("dialog_cancel")).clicked() {
                return DialogAction::Close;
            }
            DialogAction::None
        })
        .inner
    }
}
