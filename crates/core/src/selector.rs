//! Poster selection.
//!
//! Posters are bucketed by the configured language preference list. The first
//! non-empty bucket wins and its widest poster is chosen. When no poster falls
//! into any bucket the widest poster overall is used. Ties on width keep the
//! poster the catalog listed first.

use crate::external_catalog::{PosterCandidate, PosterLanguage};

/// Pick the best poster for the given language preferences.
///
/// Returns `None` only when `posters` is empty.
pub fn select_poster<'a>(
    posters: &'a [PosterCandidate],
    preferences: &[PosterLanguage],
) -> Option<&'a PosterCandidate> {
    preferences
        .iter()
        .find_map(|language| {
            widest(
                posters
                    .iter()
                    .filter(|p| language.matches(p.language.as_deref())),
            )
        })
        .or_else(|| widest(posters.iter()))
}

fn widest<'a>(posters: impl Iterator<Item = &'a PosterCandidate>) -> Option<&'a PosterCandidate> {
    posters.fold(None, |best, poster| match best {
        Some(current) if current.width >= poster.width => Some(current),
        _ => Some(poster),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poster(path: &str, language: Option<&str>, width: u32) -> PosterCandidate {
        PosterCandidate {
            file_path: path.to_string(),
            language: language.map(str::to_string),
            width,
        }
    }

    fn prefs(values: &[&str]) -> Vec<PosterLanguage> {
        values.iter().map(|v| v.parse().unwrap()).collect()
    }

    #[test]
    fn test_empty_list_has_no_poster() {
        assert!(select_poster(&[], &prefs(&["en"])).is_none());
    }

    #[test]
    fn test_english_beats_wider_untagged() {
        let posters = vec![
            poster("/untagged.jpg", None, 3000),
            poster("/en.jpg", Some("en"), 2000),
        ];
        let best = select_poster(&posters, &prefs(&["en"])).unwrap();
        assert_eq!(best.file_path, "/en.jpg");
    }

    #[test]
    fn test_widest_within_first_matching_bucket() {
        let posters = vec![
            poster("/en-small.jpg", Some("en"), 1000),
            poster("/es-small.jpg", Some("es"), 500),
            poster("/en-large.jpg", Some("en"), 2000),
            poster("/es-large.jpg", Some("es"), 1500),
        ];
        let best = select_poster(&posters, &prefs(&["es", "en", "null"])).unwrap();
        assert_eq!(best.file_path, "/es-large.jpg");
    }

    #[test]
    fn test_lower_priority_bucket_used_when_higher_empty() {
        let posters = vec![
            poster("/untagged.jpg", None, 4000),
            poster("/en.jpg", Some("en"), 1000),
        ];
        let best = select_poster(&posters, &prefs(&["es", "en", "null"])).unwrap();
        assert_eq!(best.file_path, "/en.jpg");
    }

    #[test]
    fn test_untagged_bucket() {
        let posters = vec![
            poster("/fr.jpg", Some("fr"), 4000),
            poster("/untagged.jpg", None, 800),
        ];
        let best = select_poster(&posters, &prefs(&["es", "null"])).unwrap();
        assert_eq!(best.file_path, "/untagged.jpg");
    }

    #[test]
    fn test_fallback_to_global_widest() {
        let posters = vec![
            poster("/fr.jpg", Some("fr"), 1200),
            poster("/de.jpg", Some("de"), 2400),
            poster("/untagged.jpg", None, 600),
        ];
        let best = select_poster(&posters, &prefs(&["en"])).unwrap();
        assert_eq!(best.file_path, "/de.jpg");
    }

    #[test]
    fn test_width_tie_keeps_first_seen() {
        let posters = vec![
            poster("/first.jpg", Some("en"), 2000),
            poster("/second.jpg", Some("en"), 2000),
        ];
        let best = select_poster(&posters, &prefs(&["en"])).unwrap();
        assert_eq!(best.file_path, "/first.jpg");

        let best = select_poster(&posters, &prefs(&["ja"])).unwrap();
        assert_eq!(best.file_path, "/first.jpg");
    }

    #[test]
    fn test_empty_preferences_use_global_widest() {
        let posters = vec![poster("/a.jpg", Some("en"), 100), poster("/b.jpg", None, 200)];
        let best = select_poster(&posters, &[]).unwrap();
        assert_eq!(best.file_path, "/b.jpg");
    }
}
