//! Writes a deterministic sample `SpotifyFeatures.csv` so the dashboard can
//! be tried without the real dataset.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

#[derive(Serialize)]
struct SampleTrack {
    track_name: String,
    artist_name: String,
    genre: String,
    popularity: u8,
    tempo: f64,
    danceability: f64,
    energy: f64,
    loudness: f64,
    instrumentalness: f64,
}

/// Per-genre feature profile: (tempo range, energy range, instrumental share).
struct GenreProfile {
    name: &'static str,
    tempo: (f64, f64),
    energy: (f64, f64),
    instrumental_share: f64,
}

const PROFILES: [GenreProfile; 6] = [
    GenreProfile { name: "Pop", tempo: (90.0, 140.0), energy: (0.5, 0.95), instrumental_share: 0.02 },
    GenreProfile { name: "Rock", tempo: (100.0, 170.0), energy: (0.6, 1.0), instrumental_share: 0.05 },
    GenreProfile { name: "Jazz", tempo: (70.0, 150.0), energy: (0.2, 0.6), instrumental_share: 0.6 },
    GenreProfile { name: "Classical", tempo: (50.0, 120.0), energy: (0.05, 0.4), instrumental_share: 0.9 },
    GenreProfile { name: "Electronic", tempo: (110.0, 180.0), energy: (0.6, 1.0), instrumental_share: 0.5 },
    GenreProfile { name: "Hip-Hop", tempo: (80.0, 110.0), energy: (0.5, 0.9), instrumental_share: 0.01 },
];

const ADJECTIVES: [&str; 8] = [
    "Midnight", "Golden", "Electric", "Silent", "Broken", "Neon", "Velvet", "Wild",
];
const NOUNS: [&str; 8] = [
    "River", "Echo", "Horizon", "Garden", "Signal", "Mirage", "Harbor", "Pulse",
];
const ARTISTS: [&str; 10] = [
    "The Lantern Choir",
    "Ada Vale",
    "Polar Sons",
    "Miro Quartet",
    "DJ Meridian",
    "June & The Tides",
    "Karl Osten",
    "Violet Static",
    "The Night Cartographers",
    "Selene Park",
];

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let tracks_per_genre = 100;

    let output_path = "SpotifyFeatures.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("creating output file");

    let mut rows = 0usize;
    for profile in &PROFILES {
        for _ in 0..tracks_per_genre {
            let instrumentalness = if rng.random_bool(profile.instrumental_share) {
                rng.random_range(0.55..1.0)
            } else {
                rng.random_range(0.0..0.3)
            };

            let track = SampleTrack {
                track_name: format!(
                    "{} {}",
                    ADJECTIVES[rng.random_range(0..ADJECTIVES.len())],
                    NOUNS[rng.random_range(0..NOUNS.len())]
                ),
                artist_name: ARTISTS[rng.random_range(0..ARTISTS.len())].to_string(),
                genre: profile.name.to_string(),
                popularity: rng.random_range(0..=100),
                tempo: rng.random_range(profile.tempo.0..profile.tempo.1),
                danceability: rng.random_range(0.0..1.0),
                energy: rng.random_range(profile.energy.0..profile.energy.1),
                loudness: rng.random_range(-35.0..-1.0),
                instrumentalness,
            };
            writer.serialize(&track).expect("writing CSV row");
            rows += 1;
        }
    }

    writer.flush().expect("flushing CSV");
    println!("Wrote {rows} tracks to {output_path}");
}
