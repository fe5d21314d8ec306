//! Native Product Dashboard
//!
//! A desktop dashboard with a virtualized, debounced product search,
//! a counter card and a virtualized product selector.

mod app;
mod counter;
mod debounce;
mod product;
mod search;
mod settings;
mod theme;
mod widgets;

use eframe::egui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let settings = settings::Settings::load();
    let options = native_options(&settings);

    eframe::run_native(
        "Product Dashboard",
        options,
        Box::new(move |cc| Ok(Box::new(app::DashboardApp::new(cc, settings)))),
    )
}

/// Window options. Nothing is persisted between sessions.
fn native_options(settings: &settings::Settings) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Dashboard"),
        ..Default::default()
    }
}
