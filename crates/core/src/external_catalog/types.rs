//! Types shared by catalog clients, the resolver and the poster selector.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Media kinds
// ============================================================================

/// Classification of a title, selecting the TMDB endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    Show,
}

impl MediaKind {
    /// Both kinds, in the order an `auto` search queries them.
    pub const ALL: [MediaKind; 2] = [MediaKind::Movie, MediaKind::Show];

    /// Path segment used by TMDB for this kind (`movie` or `tv`).
    pub fn endpoint(self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Show => "tv",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Movie => "Movie",
            MediaKind::Show => "TV show",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            MediaKind::Movie => "🎬",
            MediaKind::Show => "📺",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Search candidates
// ============================================================================

/// A search result from either the movie or the TV search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCandidate {
    /// TMDB ID (scoped to `kind`).
    pub id: u64,
    /// Display title (`title` for movies, `name` for shows).
    pub title: String,
    pub kind: MediaKind,
    /// TMDB popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Year taken from the release or first-air date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_year: Option<u32>,
}

impl SearchCandidate {
    /// One-line description used when listing candidates, e.g. `Dune (2021) - Movie`.
    pub fn describe(&self) -> String {
        match self.release_year {
            Some(year) => format!("{} ({}) - {}", self.title, year, self.kind),
            None => format!("{} - {}", self.title, self.kind),
        }
    }
}

/// Parse the year out of a TMDB date (`YYYY-MM-DD`, sometimes empty).
pub fn year_from_date(date: Option<&str>) -> Option<u32> {
    date.and_then(|d| d.get(..4)).and_then(|y| y.parse().ok())
}

// ============================================================================
// Posters
// ============================================================================

/// A poster image offered for a title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PosterCandidate {
    /// Path relative to the image host, starting with `/`.
    pub file_path: String,
    /// ISO 639-1 code, `None` for images without text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Width in pixels.
    #[serde(default)]
    pub width: u32,
}

/// One entry of the poster language preference list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PosterLanguage {
    /// An ISO 639-1 language code.
    Tag(String),
    /// Posters carrying no language tag.
    Untagged,
}

impl PosterLanguage {
    /// Whether a poster with the given language tag belongs to this bucket.
    pub fn matches(&self, language: Option<&str>) -> bool {
        match (self, language) {
            (PosterLanguage::Tag(tag), Some(lang)) => tag.eq_ignore_ascii_case(lang),
            (PosterLanguage::Untagged, None) => true,
            _ => false,
        }
    }

    /// Value for TMDB's `include_image_language` filter.
    pub fn as_filter(&self) -> &str {
        match self {
            PosterLanguage::Tag(tag) => tag,
            PosterLanguage::Untagged => "null",
        }
    }
}

impl fmt::Display for PosterLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter())
    }
}

impl FromStr for PosterLanguage {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("null") {
            Ok(PosterLanguage::Untagged)
        } else {
            Ok(PosterLanguage::Tag(s.to_ascii_lowercase()))
        }
    }
}

impl Serialize for PosterLanguage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_filter())
    }
}

impl<'de> Deserialize<'de> for PosterLanguage {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw {
            Some(s) => s.parse().unwrap_or(PosterLanguage::Untagged),
            None => PosterLanguage::Untagged,
        })
    }
}

/// Join a preference list into an `include_image_language` value.
pub fn language_filter(languages: &[PosterLanguage]) -> String {
    languages
        .iter()
        .map(PosterLanguage::as_filter)
        .collect::<Vec<_>>()
        .join(",")
}
