/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  SpotifyFeatures.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file once → TrackDataset (memoized)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ TrackDataset  │  Vec<Track>, genre list, tempo bounds
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply FilterCriteria → filtered indices
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
