mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::MusicExplorerApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Fatal if the file is missing or malformed; no retry.
    let dataset = data::loader::load_cached(Path::new(data::loader::DEFAULT_DATA_PATH))
        .context("loading the track dataset")?;
    log::info!(
        "Loaded {} tracks across {} genres",
        dataset.len(),
        dataset.genres.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Music Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(MusicExplorerApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))
}
