use super::model::{Track, TrackDataset, FALLBACK_TEMPO_BOUNDS};

// ---------------------------------------------------------------------------
// Filter criteria: the sidebar's four predicates
// ---------------------------------------------------------------------------

/// Genre constraint: either everything or a single genre.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(String),
}

/// The user-selected constraints, applied conjunctively.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Keep tracks with popularity >= this value.
    pub min_popularity: u8,
    pub genre: GenreFilter,
    /// Inclusive BPM range (low, high).
    pub tempo_range: (i32, i32),
    /// When set, keep only tracks with instrumentalness strictly above 0.5.
    pub instrumental_only: bool,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        FilterCriteria {
            min_popularity: 50,
            genre: GenreFilter::All,
            tempo_range: FALLBACK_TEMPO_BOUNDS,
            instrumental_only: false,
        }
    }
}

impl FilterCriteria {
    /// Whether a single track passes all active predicates.
    pub fn matches(&self, track: &Track) -> bool {
        if track.popularity < self.min_popularity {
            return false;
        }
        if let GenreFilter::Only(genre) = &self.genre {
            if track.genre != *genre {
                return false;
            }
        }
        let (low, high) = self.tempo_range;
        if track.tempo < f64::from(low) || track.tempo > f64::from(high) {
            return false;
        }
        if self.instrumental_only && track.instrumentalness <= 0.5 {
            return false;
        }
        true
    }
}

/// Return indices of tracks passing all active filters, in dataset order.
/// An empty result is a valid state, not an error.
pub fn filtered_indices(dataset: &TrackDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .tracks
        .iter()
        .enumerate()
        .filter(|(_, track)| criteria.matches(track))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(name: &str, genre: &str, popularity: u8, tempo: f64, inst: f64) -> Track {
        Track {
            track_name: name.into(),
            artist_name: "artist".into(),
            genre: genre.into(),
            popularity,
            tempo,
            danceability: 0.5,
            energy: 0.5,
            loudness: -7.0,
            instrumentalness: inst,
        }
    }

    fn dataset() -> TrackDataset {
        TrackDataset::from_tracks(vec![
            track("a", "Pop", 80, 120.0, 0.0),
            track("b", "Rock", 40, 100.0, 0.9),
            track("c", "Pop", 55, 60.0, 0.5),
            track("d", "Jazz", 70, 160.0, 0.7),
            track("e", "Jazz", 90, 190.0, 0.2),
        ])
    }

    fn wide_open() -> FilterCriteria {
        FilterCriteria {
            min_popularity: 0,
            genre: GenreFilter::All,
            tempo_range: (0, 300),
            instrumental_only: false,
        }
    }

    #[test]
    fn result_is_an_ordered_subset() {
        let ds = dataset();
        let criteria = FilterCriteria {
            min_popularity: 50,
            ..wide_open()
        };
        let indices = filtered_indices(&ds, &criteria);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        assert!(indices.iter().all(|&i| i < ds.len()));
    }

    #[test]
    fn reapplying_criteria_to_its_own_output_is_identity() {
        let ds = dataset();
        let criteria = FilterCriteria {
            min_popularity: 55,
            tempo_range: (60, 160),
            ..wide_open()
        };
        let once = filtered_indices(&ds, &criteria);
        let subset =
            TrackDataset::from_tracks(once.iter().map(|&i| ds.tracks[i].clone()).collect());
        let twice = filtered_indices(&subset, &criteria);
        assert_eq!(twice, (0..once.len()).collect::<Vec<_>>());
    }

    #[test]
    fn raising_min_popularity_never_grows_the_result() {
        let ds = dataset();
        let mut previous = usize::MAX;
        for min in [0u8, 40, 55, 70, 90, 100] {
            let criteria = FilterCriteria {
                min_popularity: min,
                ..wide_open()
            };
            let n = filtered_indices(&ds, &criteria).len();
            assert!(n <= previous, "min_popularity={min} grew the result");
            previous = n;
        }
    }

    #[test]
    fn narrowing_tempo_never_grows_the_result() {
        let ds = dataset();
        let wide = filtered_indices(
            &ds,
            &FilterCriteria {
                tempo_range: (0, 300),
                ..wide_open()
            },
        );
        let narrow = filtered_indices(
            &ds,
            &FilterCriteria {
                tempo_range: (90, 150),
                ..wide_open()
            },
        );
        assert!(narrow.len() <= wide.len());
    }

    #[test]
    fn tempo_bounds_are_inclusive() {
        let ds = dataset();
        let criteria = FilterCriteria {
            tempo_range: (60, 160),
            ..wide_open()
        };
        let indices = filtered_indices(&ds, &criteria);
        // c sits exactly on the low bound, d exactly on the high bound
        assert!(indices.contains(&2));
        assert!(indices.contains(&3));
        // e at 190 BPM is out
        assert!(!indices.contains(&4));
    }

    #[test]
    fn instrumentalness_half_is_excluded() {
        let ds = dataset();
        let criteria = FilterCriteria {
            instrumental_only: true,
            ..wide_open()
        };
        let indices = filtered_indices(&ds, &criteria);
        // b (0.9) and d (0.7) pass; c at exactly 0.5 does not
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn default_criteria_match_popularity_and_tempo() {
        let ds = dataset();
        let indices = filtered_indices(&ds, &FilterCriteria::default());
        for &i in &indices {
            let t = &ds.tracks[i];
            assert!(t.popularity >= 50);
            assert!((60.0..=160.0).contains(&t.tempo));
        }
        assert_eq!(indices, vec![0, 2, 3]);
    }

    #[test]
    fn genre_filter_keeps_only_that_genre() {
        let ds = dataset();
        let criteria = FilterCriteria {
            genre: GenreFilter::Only("Pop".into()),
            ..wide_open()
        };
        for &i in &filtered_indices(&ds, &criteria) {
            assert_eq!(ds.tracks[i].genre, "Pop");
        }
    }

    #[test]
    fn no_instrumental_tracks_yields_empty_result() {
        let ds = TrackDataset::from_tracks(vec![
            track("a", "Pop", 80, 120.0, 0.1),
            track("b", "Rock", 60, 100.0, 0.5),
        ]);
        let criteria = FilterCriteria {
            instrumental_only: true,
            ..wide_open()
        };
        assert!(filtered_indices(&ds, &criteria).is_empty());
    }
}
