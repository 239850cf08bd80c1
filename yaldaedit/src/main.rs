//! yaldaEdit — a minimal text editor with encouragement and confetti

mod app;
mod clipboard;
mod document;

use app::YaldaEditApp;
use eframe::NativeOptions;

fn main() -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_title("yaldaEdit"),
        ..Default::default()
    };

    eframe::run_native(
        "yaldaEdit",
        options,
        Box::new(|cc| {
            yaldacore::YaldaTheme::default().apply(&cc.egui_ctx);
            Box::new(YaldaEditApp::new(cc))
        }),
    )
}
