pub mod client;
pub mod types;

pub use client::{ApiError, Fetched, HttpLyricsService, LyricsService, fetch_lyrics, fetch_trending};
pub use types::DecodeError;
