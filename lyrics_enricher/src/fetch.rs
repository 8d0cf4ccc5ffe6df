use std::path::Path;

use anyhow::Result;
use genius_client::Client;

use crate::models::{LyricsRow, TrackRecord};
use crate::output;

/// Outcome of a single fetch. `NotFound` is a soft failure: the provider had
/// no match, no row was written and no retry is warranted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Written,
    NotFound,
}

/// Fetches the lyrics for one track and appends a `(track_id, track_name,
/// song_lyrics)` row to the output CSV.
///
/// Provider errors propagate to the caller; this function itself never
/// retries.
pub async fn fetch_and_append(
    client: &Client,
    track: &TrackRecord,
    artist_name: &str,
    output_path: &Path,
) -> Result<FetchOutcome> {
    let Some(artist) = client.search_artist(artist_name).await? else {
        println!("Artist '{artist_name}' was not found.");
        return Ok(FetchOutcome::NotFound);
    };

    let Some(song) = client.search_song(&track.track_name, &artist.name).await? else {
        println!("Track '{}' was not found.", track.track_name);
        return Ok(FetchOutcome::NotFound);
    };

    let song_lyrics = client.get_lyric(&song).await?;
    let row = LyricsRow {
        track_id: track.track_id.clone(),
        track_name: track.track_name.clone(),
        song_lyrics,
    };
    output::append_row(output_path, &row)?;
    println!(
        "Lyrics for '{}' were appended to {}.",
        track.track_name,
        output_path.display()
    );

    Ok(FetchOutcome::Written)
}
