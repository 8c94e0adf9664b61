use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::{TrackDataset, COLUMNS};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Shared track table
// ---------------------------------------------------------------------------

/// Render a table of the given dataset rows.  `indices` selects and orders
/// the rows; `scroll` enables row virtualization for large views.
fn track_table(ui: &mut Ui, dataset: &TrackDataset, indices: &[usize], scroll: bool) {
    TableBuilder::new(ui)
        .id_salt(("track_table", scroll))
        .striped(true)
        .resizable(true)
        .vscroll(scroll)
        .columns(Column::auto().at_least(60.0), COLUMNS.len())
        .header(20.0, |mut header| {
            for col in COLUMNS {
                header.col(|ui: &mut Ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, indices.len(), |mut row| {
                let track = &dataset.tracks[indices[row.index()]];
                let cells = [
                    track.track_name.clone(),
                    track.artist_name.clone(),
                    track.genre.clone(),
                    track.popularity.to_string(),
                    format!("{:.1}", track.tempo),
                    format!("{:.3}", track.danceability),
                    format!("{:.3}", track.energy),
                    format!("{:.1}", track.loudness),
                    format!("{:.3}", track.instrumentalness),
                ];
                for cell in cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Data page – raw preview of the unfiltered dataset
// ---------------------------------------------------------------------------

pub fn data_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Raw Data");
    ui.label("First 10 rows of the dataset:");
    ui.add_space(4.0);

    let preview: Vec<usize> = (0..state.dataset.len().min(10)).collect();
    track_table(ui, state.dataset, &preview, false);

    ui.add_space(8.0);
    ui.label(format!("Columns: {}", COLUMNS.join(", ")));
}

// ---------------------------------------------------------------------------
// Explore page – the full filtered view
// ---------------------------------------------------------------------------

pub fn explore_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Explore Filtered Data");
    ui.label(format!(
        "Showing {} tracks after filtering",
        state.visible.len()
    ));
    ui.add_space(4.0);

    if state.visible.is_empty() {
        ui.label("No tracks match the current filters.");
        return;
    }
    track_table(ui, state.dataset, &state.visible, true);
}

// ---------------------------------------------------------------------------
// Random Song page
// ---------------------------------------------------------------------------

pub fn random_song_page(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Random Song");
    ui.add_space(4.0);

    if state.visible.is_empty() {
        ui.label("No tracks match the current filters – nothing to pick from.");
        return;
    }

    if ui.button("Give me a random track").clicked() {
        state.pick_random();
    }

    ui.add_space(8.0);
    match state.random_pick {
        Some(idx) => {
            let track = &state.dataset.tracks[idx];
            ui.separator();
            ui.label(
                RichText::new(format!("{} – {}", track.track_name, track.artist_name))
                    .strong()
                    .size(18.0)
                    .color(state.colors.color_for(&track.genre)),
            );
            ui.label(format!(
                "Genre: {}, Popularity: {}",
                track.genre, track.popularity
            ));
        }
        None => {
            ui.label(RichText::new("Press the button to draw a track.").weak());
        }
    }
}
