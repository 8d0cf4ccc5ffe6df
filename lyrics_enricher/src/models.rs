use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Header of the output CSV, written once per run before any data row.
pub const OUTPUT_HEADER: [&str; 3] = ["track_id", "track_name", "song_lyrics"];

/// A track row of the input CSV. `artist_name` may hold a comma-separated
/// list of artists.
#[derive(Debug, Deserialize)]
pub struct TrackRecord {
    pub track_id: String,
    pub track_name: String,
    pub artist_name: String,
}

impl TrackRecord {
    /// returns the first artist of the comma-separated artist list, trimmed
    pub fn primary_artist(&self) -> &str {
        self.artist_name.split(',').next().map_or("", str::trim)
    }
}

/// A row appended to the output CSV for a successfully fetched track.
#[derive(Debug, Serialize)]
pub struct LyricsRow {
    pub track_id: String,
    pub track_name: String,
    pub song_lyrics: String,
}

/// Reads the entire input CSV into memory.
///
/// Fails on an unreadable file, a malformed row or missing required columns;
/// these are fatal for the batch.
pub fn read_tracks(path: &Path) -> Result<Vec<TrackRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open the input CSV {}", path.display()))?;
    let mut tracks = Vec::new();
    for record in reader.deserialize() {
        let track =
            record.with_context(|| format!("failed to parse the input CSV {}", path.display()))?;
        tracks.push(track);
    }
    Ok(tracks)
}
