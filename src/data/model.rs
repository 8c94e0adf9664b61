use std::collections::BTreeSet;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Track – one row of the dataset
// ---------------------------------------------------------------------------

/// Column names the dashboard cares about, in display order.
/// The source CSV may carry additional columns; those are ignored on load.
pub const COLUMNS: [&str; 9] = [
    "track_name",
    "artist_name",
    "genre",
    "popularity",
    "tempo",
    "danceability",
    "energy",
    "loudness",
    "instrumentalness",
];

/// A single track (one row of the source CSV).
#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub track_name: String,
    pub artist_name: String,
    pub genre: String,
    /// Popularity score in [0, 100].
    pub popularity: u8,
    /// Tempo in BPM.
    pub tempo: f64,
    pub danceability: f64,
    pub energy: f64,
    /// Loudness in dB (typically negative).
    pub loudness: f64,
    pub instrumentalness: f64,
}

// ---------------------------------------------------------------------------
// TrackDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// Tempo slider bounds used when the dataset has no rows to derive them from.
pub const FALLBACK_TEMPO_BOUNDS: (i32, i32) = (60, 160);

/// The full parsed dataset with pre-computed genre and tempo indices.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct TrackDataset {
    /// All tracks (rows), in file order.
    pub tracks: Vec<Track>,
    /// Sorted unique genre names.
    pub genres: Vec<String>,
    /// (floor(min tempo), ceil(max tempo)) over all tracks.
    pub tempo_bounds: (i32, i32),
}

impl TrackDataset {
    /// Build genre and tempo indices from the loaded tracks.
    pub fn from_tracks(tracks: Vec<Track>) -> Self {
        let genres: Vec<String> = tracks
            .iter()
            .map(|t| t.genre.clone())
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect();

        let tempo_bounds = if tracks.is_empty() {
            FALLBACK_TEMPO_BOUNDS
        } else {
            let min = tracks.iter().map(|t| t.tempo).fold(f64::INFINITY, f64::min);
            let max = tracks
                .iter()
                .map(|t| t.tempo)
                .fold(f64::NEG_INFINITY, f64::max);
            (min.floor() as i32, max.ceil() as i32)
        };

        TrackDataset {
            tracks,
            genres,
            tempo_bounds,
        }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
