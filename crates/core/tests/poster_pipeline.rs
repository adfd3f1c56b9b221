//! Poster pipeline integration tests.
//!
//! These tests drive `PosterFetcher` against the mock catalog:
//! - Resolution in auto and explicit modes
//! - Poster language ranking through the whole pipeline
//! - Batch tallies with mixed outcomes

use std::path::PathBuf;

use tempfile::TempDir;

use posterfetch_core::{
    testing::{fixtures, MockCatalog, RecordedCatalogQuery},
    Chooser, Config, ConsoleChooser, FetchOutcome, MediaKind, PopularityChooser, PosterFetcher,
    SearchCandidate, TypeHint,
};

/// Test helper owning a temp output directory.
struct TestHarness {
    fetcher: PosterFetcher<MockCatalog>,
    catalog: MockCatalog,
    temp_dir: TempDir,
}

impl TestHarness {
    fn new() -> Self {
        Self::with_config(Config::default())
    }

    fn with_config(config: Config) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let catalog = MockCatalog::new();
        let fetcher = PosterFetcher::new(catalog.clone(), &config)
            .with_output_dir(temp_dir.path().join("posters"));

        Self {
            fetcher,
            catalog,
            temp_dir,
        }
    }

    fn poster_path(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join("posters").join(name)
    }

    async fn add_inception(&self) {
        self.catalog
            .add_search_results(
                MediaKind::Movie,
                "Inception",
                vec![fixtures::movie(27205, "Inception", 90.0)],
            )
            .await;
        self.catalog
            .add_posters(
                MediaKind::Movie,
                27205,
                vec![
                    fixtures::poster("/untagged.jpg", None, 500),
                    fixtures::poster("/en.jpg", Some("en"), 2000),
                ],
            )
            .await;
        self.catalog
            .add_image("mock://images/original/en.jpg", b"inception-en".to_vec())
            .await;
    }
}

/// Chooser that fails the test if consulted.
struct NoPrompt;

impl Chooser for NoPrompt {
    fn choose(&mut self, title: &str, _candidates: &[SearchCandidate]) -> usize {
        panic!("unexpected prompt for '{}'", title);
    }
}

#[tokio::test]
async fn test_inception_end_to_end() {
    let harness = TestHarness::new();
    harness.add_inception().await;

    let outcome = harness
        .fetcher
        .fetch("Inception", TypeHint::Auto, &mut NoPrompt)
        .await
        .unwrap();

    let expected = harness.poster_path("Inception.jpg");
    match &outcome {
        FetchOutcome::Saved { candidate, path } => {
            assert_eq!(candidate.id, 27205);
            assert_eq!(candidate.kind, MediaKind::Movie);
            assert_eq!(path, &expected);
        }
        other => panic!("expected saved poster, got {:?}", other),
    }
    assert_eq!(std::fs::read(&expected).unwrap(), b"inception-en");

    let queries = harness.catalog.recorded_queries().await;
    assert_eq!(
        queries[..2],
        [
            RecordedCatalogQuery::Search {
                kind: MediaKind::Movie,
                query: "Inception".to_string()
            },
            RecordedCatalogQuery::Search {
                kind: MediaKind::Show,
                query: "Inception".to_string()
            },
        ]
    );
}

#[tokio::test]
async fn test_single_candidate_never_prompts_in_interactive_mode() {
    let harness = TestHarness::new();
    harness.add_inception().await;

    // Input that would pick nothing sensible if it were read.
    let mut console = ConsoleChooser::new(&b"garbage\n"[..], Vec::new());
    let outcome = harness
        .fetcher
        .fetch("Inception", TypeHint::Auto, &mut console)
        .await
        .unwrap();

    assert!(outcome.is_saved());
    assert!(console.into_output().is_empty());
}

#[tokio::test]
async fn test_interactive_choice_is_respected() {
    let harness = TestHarness::new();
    harness
        .catalog
        .add_search_results(
            MediaKind::Movie,
            "Dune",
            vec![fixtures::movie(438631, "Dune", 300.0)],
        )
        .await;
    harness
        .catalog
        .add_search_results(
            MediaKind::Show,
            "Dune",
            vec![fixtures::show(1234, "Frank Herbert's Dune", 20.0)],
        )
        .await;
    harness
        .catalog
        .add_posters(
            MediaKind::Show,
            1234,
            vec![fixtures::poster("/dune-tv.jpg", Some("en"), 1000)],
        )
        .await;

    let mut console = ConsoleChooser::new(&b"2\n"[..], Vec::new());
    let outcome = harness
        .fetcher
        .fetch("Dune", TypeHint::Auto, &mut console)
        .await
        .unwrap();

    assert_eq!(
        outcome.path(),
        Some(&harness.poster_path("Frank Herberts Dune.jpg"))
    );
}

#[tokio::test]
async fn test_unknown_title_writes_no_file() {
    let harness = TestHarness::new();

    for hint in [TypeHint::Auto, TypeHint::Movie, TypeHint::Show] {
        let outcome = harness
            .fetcher
            .fetch("Zzzyzx Road Nonexistent", hint, &mut PopularityChooser)
            .await
            .unwrap();
        assert_eq!(outcome, FetchOutcome::NotFound);
    }

    let files = std::fs::read_dir(harness.temp_dir.path().join("posters"))
        .unwrap()
        .count();
    assert_eq!(files, 0);
}

#[tokio::test]
async fn test_spanish_first_priority() {
    let mut config = Config::default();
    config.posters.language_priority = vec![
        "es".parse().unwrap(),
        "en".parse().unwrap(),
        "null".parse().unwrap(),
    ];
    let harness = TestHarness::with_config(config);
    harness
        .catalog
        .add_search_results(
            MediaKind::Movie,
            "Roma",
            vec![fixtures::movie(426426, "Roma", 15.0)],
        )
        .await;
    harness
        .catalog
        .add_posters(
            MediaKind::Movie,
            426426,
            vec![
                fixtures::poster("/en.jpg", Some("en"), 4000),
                fixtures::poster("/es.jpg", Some("es"), 1000),
            ],
        )
        .await;

    harness
        .fetcher
        .fetch("Roma", TypeHint::Movie, &mut PopularityChooser)
        .await
        .unwrap();

    let queries = harness.catalog.recorded_queries().await;
    assert!(queries.contains(&RecordedCatalogQuery::FetchImage {
        url: "mock://images/original/es.jpg".to_string()
    }));
}

#[tokio::test]
async fn test_batch_with_mixed_outcomes() {
    let harness = TestHarness::new();
    harness.add_inception().await;

    let titles = vec![
        "Inception".to_string(),
        "Not A Real Movie".to_string(),
        "Also Missing".to_string(),
    ];
    let mut lines = Vec::new();

    let result = harness
        .fetcher
        .run_batch(&titles, TypeHint::Auto, |title, outcome| {
            lines.push(outcome.report_line(title))
        })
        .await
        .unwrap();

    assert_eq!(result.succeeded, vec!["Inception"]);
    assert_eq!(result.failed, vec!["Not A Real Movie", "Also Missing"]);

    let summary = result.summary();
    assert!(summary.contains("Downloaded: 1"));
    assert!(summary.contains("Failed: 2"));
    assert!(summary.contains("Not A Real Movie, Also Missing"));

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("✅ 🎬 Inception → "));
    assert_eq!(lines[1], "❌ Not found: Not A Real Movie");
    assert_eq!(lines[2], "❌ Not found: Also Missing");
}

#[tokio::test]
async fn test_batch_no_poster_counts_as_failure() {
    let harness = TestHarness::new();
    harness
        .catalog
        .add_search_results(
            MediaKind::Show,
            "Lost Pilot",
            vec![fixtures::show(77, "Lost Pilot", 1.0)],
        )
        .await;

    let titles = vec!["Lost Pilot".to_string()];
    let mut lines = Vec::new();
    let result = harness
        .fetcher
        .run_batch(&titles, TypeHint::Auto, |title, outcome| {
            lines.push(outcome.report_line(title))
        })
        .await
        .unwrap();

    assert!(result.succeeded.is_empty());
    assert_eq!(result.failed, vec!["Lost Pilot"]);
    assert_eq!(lines, vec!["❌ No poster: Lost Pilot"]);
}

#[tokio::test]
async fn test_batch_picks_most_popular_without_prompting() {
    let harness = TestHarness::new();
    harness
        .catalog
        .add_search_results(
            MediaKind::Movie,
            "Fargo",
            vec![fixtures::movie(275, "Fargo", 20.0)],
        )
        .await;
    harness
        .catalog
        .add_search_results(
            MediaKind::Show,
            "Fargo",
            vec![fixtures::show(60622, "Fargo", 60.0)],
        )
        .await;
    harness
        .catalog
        .add_posters(
            MediaKind::Show,
            60622,
            vec![fixtures::poster("/fargo-tv.jpg", None, 1400)],
        )
        .await;

    let result = harness
        .fetcher
        .run_batch(&["Fargo".to_string()], TypeHint::Auto, |_, _| {})
        .await
        .unwrap();

    assert_eq!(result.succeeded, vec!["Fargo"]);
    let queries = harness.catalog.recorded_queries().await;
    assert!(queries.contains(&RecordedCatalogQuery::FetchImage {
        url: "mock://images/original/fargo-tv.jpg".to_string()
    }));
}
