//! # Song Catalog
//!
//! Songs as the rest of the app sees them, plus the client-side search
//! over whatever the catalog service returned.
//!
//! Search is a plain case-insensitive substring match on title and
//! artist. An empty (or all-whitespace) query means "show trending",
//! which is the full catalog. A non-empty query returns only matches,
//! even when there are none.

use std::collections::HashSet;

/// Level label the service uses for beginner-friendly songs.
pub const BEGINNER_LEVEL: &str = "초급";

/// A song from the catalog service. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    pub genre: String,
    pub level: String,
}

/// The subset of a song the navigation state holds while a session runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSong {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
}

impl From<&Song> for SelectedSong {
    fn from(song: &Song) -> Self {
        Self {
            id: song.id.clone(),
            title: song.title.clone(),
            artist: song.artist.clone(),
            cover_url: song.cover_url.clone(),
        }
    }
}

/// Filter chips on the search screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CatalogFilter {
    #[default]
    All,
    Beginner,
    Recent,
}

impl CatalogFilter {
    pub const ALL: [CatalogFilter; 3] = [
        CatalogFilter::All,
        CatalogFilter::Beginner,
        CatalogFilter::Recent,
    ];

    pub fn next(self) -> Self {
        match self {
            CatalogFilter::All => CatalogFilter::Beginner,
            CatalogFilter::Beginner => CatalogFilter::Recent,
            CatalogFilter::Recent => CatalogFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogFilter::All => "전체",
            CatalogFilter::Beginner => "초급 추천",
            CatalogFilter::Recent => "최근 학습한 곡",
        }
    }

    fn admits(self, song: &Song, recent: &HashSet<String>) -> bool {
        match self {
            CatalogFilter::All => true,
            CatalogFilter::Beginner => song.level == BEGINNER_LEVEL,
            CatalogFilter::Recent => recent.contains(&song.id),
        }
    }
}

/// Case-insensitive substring search over title and artist. A blank
/// query lists everything; otherwise whitespace is part of the needle.
pub fn search<'a>(query: &str, catalog: &'a [Song]) -> Vec<&'a Song> {
    if query.trim().is_empty() {
        return catalog.iter().collect();
    }
    let needle = query.to_lowercase();
    catalog
        .iter()
        .filter(|song| {
            song.title.to_lowercase().contains(&needle)
                || song.artist.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Search, then narrow by filter chip. `recent` holds ids of songs
/// studied earlier in this run.
pub fn filtered<'a>(
    query: &str,
    filter: CatalogFilter,
    recent: &HashSet<String>,
    catalog: &'a [Song],
) -> Vec<&'a Song> {
    search(query, catalog)
        .into_iter()
        .filter(|song| filter.admits(song, recent))
        .collect()
}

#[cfg(test)]
pub(crate) fn song(id: &str, title: &str, artist: &str, level: &str) -> Song {
    Song {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        cover_url: format!("https://img.example/{id}.jpg"),
        genre: "Pop".to_string(),
        level: level.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Song> {
        vec![
            song("1", "Dynamite", "BTS", "초급"),
            song("2", "How You Like That", "BLACKPINK", "중급"),
            song("3", "Love Scenario", "iKON", "초급"),
            song("4", "Spring Day", "BTS", "중급"),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = search("bts", &catalog);
        let ids: Vec<&str> = hits.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_search_matches_title() {
        let catalog = catalog();
        let hits = search("SCENARIO", &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].artist, "iKON");
    }

    #[test]
    fn test_empty_query_returns_full_catalog() {
        let catalog = catalog();
        assert_eq!(search("", &catalog).len(), 4);
        assert_eq!(search("   ", &catalog).len(), 4);
    }

    #[test]
    fn test_search_keeps_surrounding_whitespace() {
        let catalog = catalog();
        assert!(search("bts ", &catalog).is_empty());
        assert!(search(" dynamite", &catalog).is_empty());

        let hits = search("love ", &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_no_match_stays_empty() {
        let catalog = catalog();
        assert!(search("twice", &catalog).is_empty());
    }

    #[test]
    fn test_beginner_filter_composes_with_query() {
        let catalog = catalog();
        let hits = filtered("bts", CatalogFilter::Beginner, &HashSet::new(), &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Dynamite");
    }

    #[test]
    fn test_recent_filter_uses_studied_ids() {
        let catalog = catalog();
        let recent: HashSet<String> = ["3".to_string()].into_iter().collect();
        let hits = filtered("", CatalogFilter::Recent, &recent, &catalog);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "3");
    }

    #[test]
    fn test_filter_cycle() {
        let mut f = CatalogFilter::default();
        for expected in CatalogFilter::ALL.iter().skip(1) {
            f = f.next();
            assert_eq!(f, *expected);
        }
        assert_eq!(f.next(), CatalogFilter::All);
    }

    #[test]
    fn test_selected_song_from_song() {
        let s = song("9", "Butter", "BTS", "초급");
        let selected = SelectedSong::from(&s);
        assert_eq!(selected.id, "9");
        assert_eq!(selected.cover_url, s.cover_url);
    }
}
