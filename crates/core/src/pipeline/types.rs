//! Types produced by the fetch pipeline.

use std::path::PathBuf;

use crate::external_catalog::SearchCandidate;

/// Result of running the pipeline for one title.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The poster was downloaded and written.
    Saved {
        candidate: SearchCandidate,
        path: PathBuf,
    },
    /// The search produced no candidate.
    NotFound,
    /// The title resolved but has no poster images.
    NoPoster { candidate: SearchCandidate },
}

impl FetchOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }

    /// Path of the written file, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            FetchOutcome::Saved { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Console line describing this outcome for the requested `title`.
    pub fn report_line(&self, title: &str) -> String {
        match self {
            FetchOutcome::Saved { candidate, path } => format!(
                "✅ {} {} → {}",
                candidate.kind.icon(),
                candidate.title,
                path.display()
            ),
            FetchOutcome::NotFound => format!("❌ Not found: {}", title),
            FetchOutcome::NoPoster { .. } => format!("❌ No poster: {}", title),
        }
    }
}

/// Tally of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// Titles whose poster was written, in processing order.
    pub succeeded: Vec<String>,
    /// Titles that were not found or had no poster, in processing order.
    pub failed: Vec<String>,
}

impl BatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one title's outcome to the tally.
    pub fn record(&mut self, title: &str, outcome: &FetchOutcome) {
        if outcome.is_saved() {
            self.succeeded.push(title.to_string());
        } else {
            self.failed.push(title.to_string());
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }

    /// Summary printed after a batch.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "=".repeat(40),
            format!("✅ Downloaded: {}", self.succeeded.len()),
            format!("❌ Failed: {}", self.failed.len()),
        ];
        if !self.failed.is_empty() {
            lines.push(format!("   → {}", self.failed.join(", ")));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[test]
    fn test_report_lines() {
        let saved = FetchOutcome::Saved {
            candidate: fixtures::movie(27205, "Inception", 90.0),
            path: PathBuf::from("posters/Inception.jpg"),
        };
        assert_eq!(
            saved.report_line("inception"),
            "✅ 🎬 Inception → posters/Inception.jpg"
        );
        assert_eq!(FetchOutcome::NotFound.report_line("Xyz"), "❌ Not found: Xyz");

        let no_poster = FetchOutcome::NoPoster {
            candidate: fixtures::show(1, "Obscure", 0.1),
        };
        assert_eq!(no_poster.report_line("obscure"), "❌ No poster: obscure");
    }

    #[test]
    fn test_batch_tally_and_summary() {
        let mut result = BatchResult::new();
        result.record(
            "Inception",
            &FetchOutcome::Saved {
                candidate: fixtures::movie(27205, "Inception", 90.0),
                path: PathBuf::from("posters/Inception.jpg"),
            },
        );
        result.record("Foo", &FetchOutcome::NotFound);
        result.record(
            "Bar",
            &FetchOutcome::NoPoster {
                candidate: fixtures::movie(2, "Bar", 1.0),
            },
        );

        assert_eq!(result.succeeded, vec!["Inception"]);
        assert_eq!(result.failed, vec!["Foo", "Bar"]);
        assert_eq!(result.total(), 3);

        let summary = result.summary();
        assert!(summary.contains("✅ Downloaded: 1"));
        assert!(summary.contains("❌ Failed: 2"));
        assert!(summary.ends_with("   → Foo, Bar"));
    }

    #[test]
    fn test_summary_without_failures_omits_list() {
        let result = BatchResult::new();
        assert!(!result.summary().contains('→'));
    }
}
