//! Search songs and lyrics on Genius.
//!
//! This crate provides Rust APIs to look up an artist, a song scoped to that
//! artist, and the song's lyric text.

use anyhow::Result;

mod parse;

const API_BASE_URL: &str = "https://api.genius.com";
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(15);

/// Maximum number of search hits considered when resolving an artist.
const MAX_ARTIST_CANDIDATES: usize = 5;

pub struct Client {
    http: reqwest::Client,
    token: String,
}

/// An artist resolved from a search, carrying the provider's canonical name.
#[derive(Debug, Clone)]
pub struct Artist {
    pub name: String,
}

/// A song resolved from a search. `url` points to the song's lyrics page.
#[derive(Debug, Clone)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub url: String,
}

impl Client {
    /// Constructs a new client authenticating with the given API token.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<search::Hit>> {
        log::debug!("search the provider for {query}");
        let body = self
            .http
            .get(format!("{API_BASE_URL}/search"))
            .query(&[("q", query)])
            .bearer_auth(&self.token)
            .send()
            .await?
            .json::<search::Body>()
            .await?;

        if body.meta.status != 200 {
            let message = match body.meta.message {
                Some(m) => m,
                None => format!("request failed with status code: {}", body.meta.status),
            };
            return Err(anyhow::anyhow!(message));
        }

        Ok(body.response.map(|r| r.hits).unwrap_or_default())
    }

    /// Searches for an artist by name and returns the top match, or `None`
    /// if the provider has no hit for the name.
    pub async fn search_artist(&self, name: &str) -> Result<Option<Artist>> {
        let hits = self.search(name).await?;
        Ok(pick_artist(&hits, name))
    }

    /// Searches for a song by title scoped to an artist's canonical name and
    /// returns the first match, or `None` if no hit belongs to the artist.
    pub async fn search_song(&self, title: &str, artist_name: &str) -> Result<Option<Song>> {
        let hits = self.search(&format!("{title} {artist_name}")).await?;
        Ok(pick_song(hits, artist_name))
    }

    /// Retrieves a song's lyric text.
    ///
    /// The search API doesn't return lyric bodies, so this downloads the
    /// song's lyrics page and extracts the text from its DOM.
    pub async fn get_lyric(&self, song: &Song) -> Result<String> {
        log::debug!("get the lyrics page at {}", song.url);
        let html = self.http.get(&song.url).send().await?.text().await?;
        let lyric = parse::parse_lyric_html(&html)?;
        if lyric.is_empty() {
            log::warn!("no lyric text found in the page at {}", song.url);
        }
        Ok(lyric)
    }
}

fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Picks the artist out of the first `MAX_ARTIST_CANDIDATES` song hits,
/// preferring a hit whose primary artist matches `name` case-insensitively.
fn pick_artist(hits: &[search::Hit], name: &str) -> Option<Artist> {
    let mut top_match = None;
    for hit in hits.iter().filter(|h| h.is_song()).take(MAX_ARTIST_CANDIDATES) {
        let artist = &hit.result.primary_artist.name;
        if names_match(artist, name) {
            return Some(Artist {
                name: artist.clone(),
            });
        }
        if top_match.is_none() {
            top_match = Some(Artist {
                name: artist.clone(),
            });
        }
    }
    top_match
}

/// Picks the first song hit whose primary artist matches `artist_name`.
fn pick_song(hits: Vec<search::Hit>, artist_name: &str) -> Option<Song> {
    hits.into_iter()
        .filter(search::Hit::is_song)
        .find(|h| names_match(&h.result.primary_artist.name, artist_name))
        .map(|h| Song {
            title: h.result.title,
            artist: h.result.primary_artist.name,
            url: h.result.url,
        })
}

mod search {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Body {
        pub meta: Metadata,
        pub response: Option<Response>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Metadata {
        pub status: u16,
        pub message: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Response {
        pub hits: Vec<Hit>,
    }

    #[derive(Debug, Deserialize)]
    pub struct Hit {
        #[serde(rename(deserialize = "type"))]
        pub ty: String,
        pub result: SongResult,
    }

    impl Hit {
        pub fn is_song(&self) -> bool {
            self.ty == "song"
        }
    }

    #[derive(Debug, Deserialize)]
    pub struct SongResult {
        pub title: String,
        pub url: String,
        pub primary_artist: PrimaryArtist,
    }

    #[derive(Debug, Deserialize)]
    pub struct PrimaryArtist {
        pub name: String,
    }
}
