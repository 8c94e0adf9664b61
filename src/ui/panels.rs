use eframe::egui::{self, Ui};

use crate::data::filter::GenreFilter;
use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Music Explorer");
        ui.separator();
        ui.label(format!(
            "{} tracks loaded, {} match the current filters",
            state.dataset.len(),
            state.visible.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – navigation + filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar.  Any filter change recomputes the visible indices.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let dataset = state.dataset;

    ui.heading("Navigation");
    for page in Page::ALL {
        ui.selectable_value(&mut state.page, page, page.label());
    }

    ui.separator();
    ui.heading("Filters");

    let mut changed = false;

    // ---- Min popularity ----
    ui.strong("Min popularity");
    changed |= ui
        .add(egui::Slider::new(&mut state.criteria.min_popularity, 0..=100))
        .changed();

    ui.add_space(4.0);

    // ---- Genre ----
    ui.strong("Genre");
    let selected_label = match &state.criteria.genre {
        GenreFilter::All => "All".to_string(),
        GenreFilter::Only(genre) => genre.clone(),
    };
    egui::ComboBox::from_id_salt("genre_filter")
        .selected_text(selected_label)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.criteria.genre == GenreFilter::All, "All")
                .clicked()
            {
                state.criteria.genre = GenreFilter::All;
                changed = true;
            }
            for genre in &dataset.genres {
                let is_selected =
                    matches!(&state.criteria.genre, GenreFilter::Only(g) if g == genre);
                if ui.selectable_label(is_selected, genre).clicked() {
                    state.criteria.genre = GenreFilter::Only(genre.clone());
                    changed = true;
                }
            }
        });

    ui.add_space(4.0);

    // ---- Tempo range ----
    ui.strong("Tempo range (BPM)");
    let (min_bpm, max_bpm) = dataset.tempo_bounds;
    let (mut low, mut high) = state.criteria.tempo_range;
    changed |= ui
        .add(egui::Slider::new(&mut low, min_bpm..=max_bpm).text("from"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut high, min_bpm..=max_bpm).text("to"))
        .changed();
    // Keep the range well-formed when the handles cross.
    high = high.max(low);
    state.criteria.tempo_range = (low, high);

    ui.add_space(4.0);

    // ---- Instrumentalness ----
    changed |= ui
        .checkbox(
            &mut state.criteria.instrumental_only,
            "Only instrumentalness > 0.5",
        )
        .changed();

    if changed {
        state.refilter();
    }
}
