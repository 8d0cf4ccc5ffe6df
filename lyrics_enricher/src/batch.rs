use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::fetch::{self, FetchOutcome};
use crate::models;
use crate::output;
use crate::retry::{self, RetryPolicy};

/// Configuration of a single batch run.
pub struct BatchConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub token: String,
    pub retry: RetryPolicy,
}

/// Processes every track of the input CSV sequentially.
///
/// The output CSV is truncated and given its header row before the first
/// track. Per-track provider failures are absorbed by the retry wrapper and
/// never stop the batch; only input/output setup errors propagate.
pub async fn run(config: &BatchConfig) -> Result<()> {
    let tracks = models::read_tracks(&config.input)?;
    log::debug!(
        "loaded {} tracks from {}",
        tracks.len(),
        config.input.display()
    );
    output::initialize_output(&config.output)?;

    let client = genius_client::Client::new(config.token.as_str())
        .context("failed to construct the provider client")?;

    let total = tracks.len();
    let mut written = 0;
    let mut not_found = 0;
    let mut failed: Vec<String> = Vec::new();

    for (index, track) in tracks.iter().enumerate() {
        let artist = track.primary_artist();
        println!("[{}/{total}] {artist} - {}", index + 1, track.track_name);

        let outcome = retry::with_retry(&config.retry, || {
            fetch::fetch_and_append(&client, track, artist, &config.output)
        })
        .await;

        match outcome {
            Some(FetchOutcome::Written) => written += 1,
            Some(FetchOutcome::NotFound) => not_found += 1,
            None => failed.push(track.track_name.clone()),
        }
    }

    println!(
        "Done: {written} written, {not_found} not found, {} failed (of {total} tracks).",
        failed.len()
    );
    if !failed.is_empty() {
        println!("Failed tracks: {}", failed.join(", "));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn an_empty_input_still_writes_the_header() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tracks.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "track_id,track_name,artist_name").unwrap();
        drop(file);

        let config = BatchConfig {
            input,
            output: dir.path().join("lyrics.csv"),
            token: "test-token".to_string(),
            retry: RetryPolicy::default(),
        };
        run(&config).await.unwrap();

        let content = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(content, "track_id,track_name,song_lyrics\n");
    }

    #[tokio::test]
    async fn a_missing_input_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = BatchConfig {
            input: dir.path().join("does-not-exist.csv"),
            output: dir.path().join("lyrics.csv"),
            token: "test-token".to_string(),
            retry: RetryPolicy::default(),
        };
        assert!(run(&config).await.is_err());
    }

    #[tokio::test]
    async fn an_unwritable_output_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tracks.csv");
        let mut file = std::fs::File::create(&input).unwrap();
        writeln!(file, "track_id,track_name,artist_name").unwrap();
        drop(file);

        let config = BatchConfig {
            input,
            output: dir.path().join("missing-dir").join("lyrics.csv"),
            token: "test-token".to_string(),
            retry: RetryPolicy::default(),
        };
        assert!(run(&config).await.is_err());
    }
}
