mod app;
mod color;
mod state;
mod ui;

use app::DocvizApp;
use docviz::Config;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Ignoring unreadable config: {e:#}");
            Config::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "docviz – Document Visualizer",
        options,
        Box::new(|_cc| Ok(Box::new(DocvizApp::new(AppState::new(config))))),
    )
}
