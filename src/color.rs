use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: genre → Color32
// ---------------------------------------------------------------------------

/// Maps each genre of the dataset to a distinct colour, used by the
/// scatter plot legend.
#[derive(Debug, Clone)]
pub struct GenreColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl GenreColors {
    /// Build a colour map from the sorted genre list.
    pub fn new(genres: &[String]) -> Self {
        let palette = generate_palette(genres.len());
        let mapping: BTreeMap<String, Color32> = genres
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        GenreColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a genre.
    pub fn color_for(&self, genre: &str) -> Color32 {
        self.mapping
            .get(genre)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors() {
        let colors = generate_palette(12);
        assert_eq!(colors.len(), 12);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_genre_falls_back_to_default() {
        let map = GenreColors::new(&["Jazz".into(), "Rock".into()]);
        assert_eq!(map.color_for("Polka"), Color32::GRAY);
        assert_ne!(map.color_for("Jazz"), map.color_for("Rock"));
    }
}
