use eframe::egui;

use portfolio_viewer::config::ViewerConfig;

mod app;
mod ui;

use app::PortfolioApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = ViewerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            let app = PortfolioApp::new(config)?;
            Ok(Box::new(app))
        }),
    )
}
