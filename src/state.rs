use rand::seq::IndexedRandom;

use crate::color::GenreColors;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::TrackDataset;

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// The four mutually exclusive dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Data,
    Explore,
    Visualizations,
    RandomSong,
}

impl Page {
    pub const ALL: [Page; 4] = [
        Page::Data,
        Page::Explore,
        Page::Visualizations,
        Page::RandomSong,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Data => "Data",
            Page::Explore => "Explore",
            Page::Visualizations => "Visualizations",
            Page::RandomSong => "Random Song",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.  The dataset itself is
/// process-scoped and read-only; everything mutable lives here.
pub struct AppState {
    /// The memoized dataset, loaded once at startup.
    pub dataset: &'static TrackDataset,

    /// Currently selected page.
    pub page: Page,

    /// Sidebar filter selections.
    pub criteria: FilterCriteria,

    /// Indices of tracks passing the current filters, ascending (cached).
    pub visible: Vec<usize>,

    /// Dataset index of the last random pick, if any.
    pub random_pick: Option<usize>,

    /// Genre colour map for the scatter plot.
    pub colors: GenreColors,
}

impl AppState {
    pub fn new(dataset: &'static TrackDataset) -> Self {
        // Keep the default tempo window inside the dataset's observed range.
        let (min_bpm, max_bpm) = dataset.tempo_bounds;
        let defaults = FilterCriteria::default();
        let criteria = FilterCriteria {
            tempo_range: (
                defaults.tempo_range.0.clamp(min_bpm, max_bpm),
                defaults.tempo_range.1.clamp(min_bpm, max_bpm),
            ),
            ..defaults
        };

        let visible = filtered_indices(dataset, &criteria);
        let colors = GenreColors::new(&dataset.genres);

        AppState {
            dataset,
            page: Page::Data,
            criteria,
            visible,
            random_pick: None,
            colors,
        }
    }

    /// Recompute `visible` after a filter change.  A previous random pick
    /// that no longer passes the filters is discarded.
    pub fn refilter(&mut self) {
        self.visible = filtered_indices(self.dataset, &self.criteria);
        self.random_pick = self
            .random_pick
            .filter(|idx| self.visible.binary_search(idx).is_ok());
    }

    /// Draw one uniformly random track from the filtered view.
    /// On an empty view this clears the pick instead of failing.
    pub fn pick_random(&mut self) {
        self.random_pick = self.visible.choose(&mut rand::rng()).copied();
    }
}
