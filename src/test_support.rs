//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;
use async_trait::async_trait;

use crate::api::{ApiError, LyricsService};
use crate::core::catalog::Song;
use crate::core::lyrics::Lyric;

/// A service with no songs and no lyrics, for tests that don't need real API calls.
pub struct NoopService;

#[async_trait]
impl LyricsService for NoopService {
    async fn songs(&self) -> Result<Vec<Song>, ApiError> {
        Ok(Vec::new())
    }

    async fn lyrics(&self, _song_id: &str) -> Result<Vec<Lyric>, ApiError> {
        Ok(Vec::new())
    }
}

/// Creates a test App with a NoopService.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopService))
}
