//! Frontend module for egui UI
//!
//! This module provides the main UI components using eframe/egui.
//! Rendering never mutates the catalog directly: panels collect
//! [`Action`] values, and the app dispatches them to the store after
//! the frame is laid out.
//!
//! # Main Types
//!
//! - [`CatalogApp`] - Main application state implementing [`eframe::App`]
//!
//! # Submodules
//!
//! - `toolbar` - Top bar with the catalog title and language selector
//! - `book_form` - Input fields for adding a new book
//! - `book_list` - Scrollable list of catalog entries
//! - `status_bar` - Bottom bar with book count and active language
//! - `dialogs` - Trait-based dialog framework and the preferences dialog

pub mod book_form;
pub mod book_list;
pub mod dialogs;
pub mod status_bar;
pub mod toolbar;

pub use book_form::BookFormState;

use crate::catalog::{Action, CatalogStore};
use crate::config::UiPreferences;
use crate::i18n;
use dialogs::{
    show_dialog, PreferencesAction, PreferencesContext, PreferencesDialog, PreferencesState,
};

/// Main application state for the book catalog
pub struct CatalogApp {
    store: CatalogStore,
    prefs: UiPreferences,
    form_state: BookFormState,

    // === Dialogs ===
    preferences_open: bool,
    preferences_state: PreferencesState,
}

impl CatalogApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>, prefs: UiPreferences) -> Self {
        let store = CatalogStore::new();

        // The catalog always starts in English; the process-wide
        // translation locale must follow the catalog language
        i18n::set_language(store.state().language);

        Self::apply_appearance(&cc.egui_ctx, &prefs);

        Self {
            store,
            prefs,
            form_state: BookFormState::default(),
            preferences_open: false,
            preferences_state: PreferencesState::default(),
        }
    }

    /// Apply visual preferences to the egui context
    ///
    /// Text sizes are derived from the default style, so reapplying
    /// does not compound the scale factor.
    fn apply_appearance(ctx: &egui::Context, prefs: &UiPreferences) {
        if prefs.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        let mut style = (*ctx.style()).clone();
        let defaults = egui::Style::default();
        for (text_style, font_id) in style.text_styles.iter_mut() {
            if let Some(default_id) = defaults.text_styles.get(text_style) {
                font_id.size = default_id.size * prefs.font_scale;
            }
        }
        ctx.set_style(style);
    }

    fn handle_action(&mut self, action: Action) {
        if let Action::SetLanguage(lang) = &action {
            i18n::set_language(*lang);
        }
        self.store.dispatch(action);
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        let prefs_was_open = self.preferences_open;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            actions.extend(toolbar::render(
                self.store.state(),
                &mut self.preferences_open,
                ui,
            ));
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status_bar::render_status_bar(ui, self.store.state());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(book_form::render(&mut self.form_state, ui));

            ui.add_space(4.0);
            ui.separator();
            ui.add_space(4.0);

            actions.extend(book_list::render(self.store.state(), ui));
        });

        for action in actions {
            self.handle_action(action);
        }

        // Seed the dialog from current preferences when it was just opened
        if self.preferences_open && !prefs_was_open {
            self.preferences_state = PreferencesState::from_prefs(&self.prefs);
        }

        if let Some(action) = show_dialog::<PreferencesDialog>(
            ctx,
            &mut self.preferences_open,
            &mut self.preferences_state,
            PreferencesContext,
        ) {
            match action {
                PreferencesAction::Apply(state) => {
                    self.prefs.dark_mode = state.dark_mode;
                    self.prefs.font_scale = state.font_scale;
                    Self::apply_appearance(ctx, &self.prefs);
                }
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = self.prefs.save() {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    }
}
