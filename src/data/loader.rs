use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{Track, TrackDataset, COLUMNS};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Fixed relative path the dashboard reads its data from.
pub const DEFAULT_DATA_PATH: &str = "SpotifyFeatures.csv";

static DATASET: OnceLock<TrackDataset> = OnceLock::new();

/// The CSV header lacks a column the dashboard requires.
#[derive(Debug, Error)]
#[error("CSV is missing required column '{0}'")]
pub struct MissingColumn(pub &'static str);

/// Load the dataset, reading the CSV at most once per process.
/// Subsequent calls return the cached dataset without touching storage.
///
/// A missing, unreadable or malformed file is a fatal startup error; callers
/// propagate it rather than recover.
pub fn load_cached(path: &Path) -> Result<&'static TrackDataset> {
    if let Some(ds) = DATASET.get() {
        return Ok(ds);
    }
    let ds = load_csv(path)?;
    Ok(DATASET.get_or_init(|| ds))
}

/// Read and parse the CSV at `path`, without memoization.
pub fn load_csv(path: &Path) -> Result<TrackDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    read_tracks(file).with_context(|| format!("parsing {}", path.display()))
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse tracks from any CSV reader.  Header row is required; columns beyond
/// [`COLUMNS`] are ignored.  Zero data rows is a valid (empty) dataset.
pub fn read_tracks<R: Read>(reader: R) -> Result<TrackDataset> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers().context("reading CSV header")?.clone();
    for col in COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(MissingColumn(col).into());
        }
    }

    let mut tracks: Vec<Track> = Vec::new();
    for (row, result) in rdr.deserialize().enumerate() {
        let track: Track = result.with_context(|| format!("CSV row {row}"))?;
        tracks.push(track);
    }

    Ok(TrackDataset::from_tracks(tracks))
}
