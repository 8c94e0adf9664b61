use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot, Points};

use crate::state::AppState;

/// Number of equal-width bins in the loudness histogram.
const LOUDNESS_BINS: usize = 30;

// ---------------------------------------------------------------------------
// Visualizations page – scatter + histogram over the filtered view
// ---------------------------------------------------------------------------

pub fn visualizations_page(ui: &mut Ui, state: &AppState) {
    ui.heading("Visualizations");

    let plot_height = (ui.available_height() - 60.0).max(120.0) / 2.0;

    // ---- Scatter: danceability vs energy, one series per genre ----
    ui.strong("Danceability vs Energy");
    Plot::new("danceability_energy")
        .legend(Legend::default())
        .x_axis_label("Danceability")
        .y_axis_label("Energy")
        .height(plot_height)
        .show(ui, |plot_ui| {
            let mut by_genre: BTreeMap<&str, Vec<[f64; 2]>> = BTreeMap::new();
            for &idx in &state.visible {
                let track = &state.dataset.tracks[idx];
                by_genre
                    .entry(track.genre.as_str())
                    .or_default()
                    .push([track.danceability, track.energy]);
            }
            for (genre, points) in by_genre {
                plot_ui.points(
                    Points::new(points)
                        .name(genre)
                        .color(state.colors.color_for(genre))
                        .radius(2.0),
                );
            }
        });

    ui.add_space(8.0);

    // ---- Histogram: loudness distribution ----
    ui.strong("Loudness Distribution (dB)");
    Plot::new("loudness_histogram")
        .x_axis_label("Loudness (dB)")
        .y_axis_label("Count")
        .height(plot_height)
        .show(ui, |plot_ui| {
            let values: Vec<f64> = state
                .visible
                .iter()
                .map(|&idx| state.dataset.tracks[idx].loudness)
                .collect();
            plot_ui.bar_chart(BarChart::new(histogram_bars(&values, LOUDNESS_BINS)));
        });
}

// ---------------------------------------------------------------------------
// Histogram binning
// ---------------------------------------------------------------------------

/// Bin `values` into `bins` equal-width bars over their observed range.
/// An empty input yields no bars; a degenerate range (all values equal)
/// yields a single bar holding every value.
pub fn histogram_bars(values: &[f64], bins: usize) -> Vec<Bar> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range.abs() < f64::EPSILON {
        return vec![Bar::new(min, values.len() as f64).width(1.0)];
    }

    let width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values {
        let bin = (((v - min) / width) as usize).min(bins - 1);
        counts[bin] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| {
            let center = min + (i as f64 + 0.5) * width;
            Bar::new(center, count as f64).width(width * 0.95)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_no_bars() {
        assert!(histogram_bars(&[], 30).is_empty());
    }

    #[test]
    fn counts_sum_to_input_length() {
        let values: Vec<f64> = (0..100).map(|i| -30.0 + f64::from(i) * 0.3).collect();
        let bars = histogram_bars(&values, 30);
        assert_eq!(bars.len(), 30);
        let total: f64 = bars.iter().map(|b| b.value).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn max_value_lands_in_the_last_bin() {
        let bars = histogram_bars(&[0.0, 5.0, 10.0], 10);
        assert_eq!(bars.last().map(|b| b.value), Some(1.0));
    }

    #[test]
    fn identical_values_collapse_to_one_bar() {
        let bars = histogram_bars(&[-7.0, -7.0, -7.0], 30);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].value, 3.0);
        assert_eq!(bars[0].argument, -7.0);
    }
}
