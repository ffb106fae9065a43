//! Bookcase - Main Entry Point
//!
//! A small desktop book catalog with runtime language switching.

use bookcase::{config::UiPreferences, frontend::CatalogApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,bookcase=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Bookcase");

    // Load UI preferences (appearance only; the catalog starts empty)
    let prefs = UiPreferences::load_or_default();

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([480.0, 360.0])
            .with_title("Bookcase"),
        ..Default::default()
    };

    // Run the eframe application
    eframe::run_native(
        "Bookcase",
        native_options,
        Box::new(|cc| {
            // Configure egui visuals based on user preference
            if prefs.dark_mode {
                cc.egui_ctx.set_visuals(egui::Visuals::dark());
            } else {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
            }

            Ok(Box::new(CatalogApp::new(cc, prefs)))
        }),
    )
}
