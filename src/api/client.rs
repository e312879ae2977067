//! HTTP client for the lyrics service.
//!
//! The service is an opaque, unauthenticated JSON API:
//!
//! - `GET {base}/songs`              trending catalog
//! - `GET {base}/lyrics?song={id}`   scored lyric lines for one song
//!
//! [`LyricsService`] is the seam the rest of the app talks to.
//! [`fetch_trending`] and [`fetch_lyrics`] wrap it with the soft-failure
//! policy: errors are logged and reported as [`Fetched::Failed`], never
//! propagated further.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::types::{DecodeError, decode_lyrics, decode_songs};
use crate::core::catalog::Song;
use crate::core::lyrics::Lyric;

/// Errors from talking to the lyrics service.
#[derive(Debug)]
pub enum ApiError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// Non-2xx response.
    Api { status: u16, message: String },
    /// The body did not match the expected shape.
    Decode(DecodeError),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Decode(e) => write!(f, "decode error: {e}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DecodeError> for ApiError {
    fn from(e: DecodeError) -> Self {
        ApiError::Decode(e)
    }
}

#[async_trait]
pub trait LyricsService: Send + Sync {
    async fn songs(&self) -> Result<Vec<Song>, ApiError>;

    /// Lyric lines for `song_id`, sorted ascending by line number.
    async fn lyrics(&self, song_id: &str) -> Result<Vec<Lyric>, ApiError>;
}

pub struct HttpLyricsService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLyricsService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout, using defaults: {e}");
                reqwest::Client::new()
            });
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        debug!("Lyrics service response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api { status, message });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl LyricsService for HttpLyricsService {
    async fn songs(&self) -> Result<Vec<Song>, ApiError> {
        let url = format!("{}/songs", self.base_url);
        info!("GET {url}");
        let body = self.get(self.client.get(&url)).await?;
        Ok(decode_songs(&body)?)
    }

    async fn lyrics(&self, song_id: &str) -> Result<Vec<Lyric>, ApiError> {
        let url = format!("{}/lyrics", self.base_url);
        info!("GET {url}?song={song_id}");
        let body = self
            .get(self.client.get(&url).query(&[("song", song_id)]))
            .await?;
        Ok(decode_lyrics(&body)?)
    }
}

/// Outcome of a soft-failing fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched<T> {
    Loaded(Vec<T>),
    /// The service answered successfully with nothing.
    Empty,
    /// The service could not be used. Carries a human-readable reason.
    Failed(String),
}

impl<T> Fetched<T> {
    fn from_result(result: Result<Vec<T>, ApiError>, what: &str) -> Self {
        match result {
            Ok(items) if items.is_empty() => Fetched::Empty,
            Ok(items) => Fetched::Loaded(items),
            Err(e) => {
                warn!("Error fetching {what}: {e}");
                Fetched::Failed(e.to_string())
            }
        }
    }

    /// Collapse to a plain list: failures become empty.
    pub fn into_items(self) -> Vec<T> {
        match self {
            Fetched::Loaded(items) => items,
            Fetched::Empty | Fetched::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }
}

pub async fn fetch_trending(service: &dyn LyricsService) -> Fetched<Song> {
    let fetched = Fetched::from_result(service.songs().await, "trending songs");
    if let Fetched::Loaded(songs) = &fetched {
        info!("Fetched {} trending songs", songs.len());
    }
    fetched
}

pub async fn fetch_lyrics(service: &dyn LyricsService, song_id: &str) -> Fetched<Lyric> {
    let fetched = Fetched::from_result(service.lyrics(song_id).await, "lyrics");
    if let Fetched::Loaded(lines) = &fetched {
        info!("Fetched {} lyric lines for song {}", lines.len(), song_id);
    }
    fetched
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingService;

    #[async_trait]
    impl LyricsService for FailingService {
        async fn songs(&self) -> Result<Vec<Song>, ApiError> {
            Err(ApiError::Network("connection refused".to_string()))
        }

        async fn lyrics(&self, _song_id: &str) -> Result<Vec<Lyric>, ApiError> {
            Err(ApiError::Api {
                status: 404,
                message: "no such song".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_failures_are_absorbed() {
        let songs = fetch_trending(&FailingService).await;
        assert!(songs.is_failed());
        assert!(songs.into_items().is_empty());

        let lyrics = fetch_lyrics(&FailingService, "1").await;
        assert_eq!(
            lyrics,
            Fetched::Failed("API error (HTTP 404): no such song".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_is_not_failure() {
        let fetched = fetch_trending(&crate::test_support::NoopService).await;
        assert_eq!(fetched, Fetched::Empty);
        assert!(!fetched.is_failed());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let service = HttpLyricsService::new("http://localhost:3001/api/", Duration::from_secs(1));
        assert_eq!(service.base_url(), "http://localhost:3001/api");
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Decode(DecodeError::DuplicateLine(4));
        assert_eq!(err.to_string(), "decode error: duplicate line_no 4");
    }
}
