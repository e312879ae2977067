//! Wire records for the lyrics service and their decode into domain types.
//!
//! Decoding is strict: a missing or mistyped field fails the whole
//! payload with a [`DecodeError`] instead of leaking half-filled records
//! into the app.

use std::collections::HashSet;
use std::fmt;

use serde::Deserialize;

use crate::core::catalog::Song;
use crate::core::lyrics::{Lyric, sort_by_line};

#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The body is not the JSON shape we expect.
    Malformed(String),
    /// A learnability score outside [0, 1].
    ScoreOutOfRange { line_no: u32, score: f64 },
    /// Two lines share a line number.
    DuplicateLine(u32),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Malformed(msg) => write!(f, "malformed payload: {msg}"),
            DecodeError::ScoreOutOfRange { line_no, score } => {
                write!(f, "line {line_no} has learning_score {score} outside [0, 1]")
            }
            DecodeError::DuplicateLine(line_no) => write!(f, "duplicate line_no {line_no}"),
        }
    }
}

impl std::error::Error for DecodeError {}

/// `GET /songs` element.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SongRecord {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default)]
    pub album: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    pub album_image_url: String,
    pub genre: String,
    pub level: String,
}

impl From<SongRecord> for Song {
    fn from(record: SongRecord) -> Self {
        Song {
            id: record.id.to_string(),
            title: record.title,
            artist: record.artist,
            cover_url: record.album_image_url,
            genre: record.genre,
            level: record.level,
        }
    }
}

/// `GET /lyrics?song=<id>` element.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LyricRecord {
    pub line_no: u32,
    pub text: String,
    #[serde(default)]
    pub translated: Option<String>,
    pub learning_score: f64,
}

impl From<LyricRecord> for Lyric {
    fn from(record: LyricRecord) -> Self {
        Lyric {
            id: record.line_no.to_string(),
            lyric: record.text,
            translated: record.translated.unwrap_or_default(),
            has_card: false,
            learning_score: record.learning_score,
        }
    }
}

pub fn decode_songs(body: &[u8]) -> Result<Vec<Song>, DecodeError> {
    let records: Vec<SongRecord> =
        serde_json::from_slice(body).map_err(|e| DecodeError::Malformed(e.to_string()))?;
    Ok(records.into_iter().map(Song::from).collect())
}

/// Decode, validate, and sort lyric lines ascending by line number.
/// Every line starts unselected.
pub fn decode_lyrics(body: &[u8]) -> Result<Vec<Lyric>, DecodeError> {
    let records: Vec<LyricRecord> =
        serde_json::from_slice(body).map_err(|e| DecodeError::Malformed(e.to_string()))?;

    let mut seen = HashSet::with_capacity(records.len());
    for record in &records {
        if !(0.0..=1.0).contains(&record.learning_score) {
            return Err(DecodeError::ScoreOutOfRange {
                line_no: record.line_no,
                score: record.learning_score,
            });
        }
        if !seen.insert(record.line_no) {
            return Err(DecodeError::DuplicateLine(record.line_no));
        }
    }

    let mut lyrics: Vec<Lyric> = records.into_iter().map(Lyric::from).collect();
    sort_by_line(&mut lyrics);
    Ok(lyrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_songs_adapts_fields() {
        let body = r#"[{
            "id": 12,
            "title": "Dynamite",
            "artist": "BTS",
            "album": "BE",
            "release_date": "2020-08-21",
            "created_at": "2024-01-01T00:00:00Z",
            "album_image_url": "https://img.example/12.jpg",
            "genre": "Pop",
            "level": "초급"
        }]"#
        .as_bytes();
        let songs = decode_songs(body).unwrap();
        assert_eq!(songs.len(), 1);
        assert_eq!(songs[0].id, "12");
        assert_eq!(songs[0].cover_url, "https://img.example/12.jpg");
        assert_eq!(songs[0].level, "초급");
    }

    #[test]
    fn test_decode_songs_rejects_missing_field() {
        let body = br#"[{"id": 1, "title": "x", "artist": "y"}]"#;
        assert!(matches!(decode_songs(body), Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_songs_rejects_string_id() {
        let body = br#"[{"id": "1", "title": "x", "artist": "y",
            "album_image_url": "", "genre": "", "level": ""}]"#;
        assert!(decode_songs(body).is_err());
    }

    #[test]
    fn test_decode_lyrics_sorts_and_defaults() {
        let body = br#"[
            {"line_no": 10, "text": "ten", "learning_score": 0.2},
            {"line_no": 2, "text": "two", "translated": "deux", "learning_score": 0.9},
            {"line_no": 1, "text": "one", "learning_score": 0.75}
        ]"#;
        let lyrics = decode_lyrics(body).unwrap();
        let ids: Vec<&str> = lyrics.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "10"]);
        assert_eq!(lyrics[0].translated, "");
        assert_eq!(lyrics[1].translated, "deux");
        assert!(lyrics.iter().all(|l| !l.has_card));
        assert_eq!(lyrics[2].learning_score, 0.2);
    }

    #[test]
    fn test_decode_lyrics_rejects_out_of_range_score() {
        let body = br#"[{"line_no": 3, "text": "x", "learning_score": 1.5}]"#;
        assert_eq!(
            decode_lyrics(body),
            Err(DecodeError::ScoreOutOfRange {
                line_no: 3,
                score: 1.5
            })
        );
    }

    #[test]
    fn test_decode_lyrics_rejects_duplicate_lines() {
        let body = br#"[
            {"line_no": 1, "text": "a", "learning_score": 0.1},
            {"line_no": 1, "text": "b", "learning_score": 0.1}
        ]"#;
        assert_eq!(decode_lyrics(body), Err(DecodeError::DuplicateLine(1)));
    }

    #[test]
    fn test_decode_lyrics_rejects_object_body() {
        let body = br#"{"error": "not found"}"#;
        assert!(matches!(decode_lyrics(body), Err(DecodeError::Malformed(_))));
    }
}
