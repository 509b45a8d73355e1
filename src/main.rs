// TimeTools Application
// Main entry point

use time_tools::ui_egui::TimeToolsApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting TimeTools");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("TimeTools")
            .with_inner_size([720.0, 900.0])
            .with_min_inner_size(TimeToolsApp::min_root_size()),
        ..Default::default()
    };

    eframe::run_native(
        "TimeTools",
        options,
        Box::new(|cc| Ok(Box::new(TimeToolsApp::new(cc)))),
    )
}
