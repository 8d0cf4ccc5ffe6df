use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "lyrics-enricher", version)]
#[command(about = "Fetch lyrics for a CSV of tracks and append them to an output CSV")]
pub struct Args {
    /// Input CSV with `track_id`, `track_name` and `artist_name` columns
    pub input: PathBuf,

    /// Output CSV the lyrics rows are appended to
    #[arg(long, default_value = "lyrics.csv")]
    pub output: PathBuf,

    /// Genius API token
    #[arg(long, env = "GENIUS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Maximum number of fetch attempts per track
    #[arg(long, default_value_t = 3)]
    pub retries: u32,

    /// Delay in seconds between attempts
    #[arg(long, default_value_t = 5)]
    pub delay: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_args() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::parse_from(["lyrics-enricher", "tracks.csv", "--token", "t"]);
        assert_eq!(args.input, PathBuf::from("tracks.csv"));
        assert_eq!(args.output, PathBuf::from("lyrics.csv"));
        assert_eq!(args.retries, 3);
        assert_eq!(args.delay, 5);
    }
}
