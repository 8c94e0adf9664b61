use eframe::egui;

use crate::data::model::TrackDataset;
use crate::state::{AppState, Page};
use crate::ui::{panels, plot, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct MusicExplorerApp {
    pub state: AppState,
}

impl MusicExplorerApp {
    pub fn new(dataset: &'static TrackDataset) -> Self {
        Self {
            state: AppState::new(dataset),
        }
    }
}

impl eframe::App for MusicExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation + filters ----
        egui::SidePanel::left("sidebar")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the selected page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Data => views::data_page(ui, &self.state),
            Page::Explore => views::explore_page(ui, &self.state),
            Page::Visualizations => plot::visualizations_page(ui, &self.state),
            Page::RandomSong => views::random_song_page(ui, &mut self.state),
        });
    }
}
