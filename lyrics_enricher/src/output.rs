use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{LyricsRow, OUTPUT_HEADER};

/// Truncates the output CSV and writes the fixed header row.
pub fn initialize_output(path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create the output CSV {}", path.display()))?;
    writer.write_record(OUTPUT_HEADER)?;
    writer.flush()?;
    Ok(())
}

/// Appends a single lyrics row to the output CSV.
///
/// The file is opened in append mode and the handle is scoped to this call,
/// so rows written earlier are preserved and the file is closed even when
/// the write fails.
pub fn append_row(path: &Path, row: &LyricsRow) -> Result<()> {
    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open the output CSV {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.serialize(row)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(track_id: &str, song_lyrics: &str) -> LyricsRow {
        LyricsRow {
            track_id: track_id.to_string(),
            track_name: "Song".to_string(),
            song_lyrics: song_lyrics.to_string(),
        }
    }

    #[test]
    fn initialize_writes_the_header_and_nothing_else() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyrics.csv");

        initialize_output(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "track_id,track_name,song_lyrics\n");
    }

    #[test]
    fn initialize_truncates_rows_of_a_prior_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyrics.csv");

        initialize_output(&path).unwrap();
        append_row(&path, &row("stale", "old lyric")).unwrap();
        initialize_output(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "track_id,track_name,song_lyrics\n");
    }

    #[test]
    fn append_preserves_earlier_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyrics.csv");

        initialize_output(&path).unwrap();
        append_row(&path, &row("1", "first lyric")).unwrap();
        append_row(&path, &row("2", "second lyric")).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "1");
        assert_eq!(&rows[1][0], "2");
    }

    #[test]
    fn append_quotes_multiline_lyrics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lyrics.csv");

        initialize_output(&path).unwrap();
        append_row(&path, &row("1", "line one\nline two")).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "line one\nline two");
    }
}
