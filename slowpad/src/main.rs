//! slowPad - a plain-text notepad for the Slow Computer
//!
//! New, open, edit and save .txt files. Asks before throwing away
//! unsaved work.

mod app;

use app::SlowPadApp;
use eframe::NativeOptions;
use padcore::PadTheme;
use slowpad::PadConfig;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("slowpad=info"))
        .init();

    let config = PadConfig::default();
    log::info!("starting slowPad {}", env!("CARGO_PKG_VERSION"));

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.untitled_name.clone())
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "slowPad",
        options,
        Box::new(|cc| {
            PadTheme::default().apply(&cc.egui_ctx);
            Box::new(SlowPadApp::new(cc, config))
        }),
    )
}
