//! Tests for scoring submission directories

use bountyboard::config::{AppConfig, SiteConfig};
use bountyboard::core::models::{CatalogSet, Category, ScoreBasis, ScoreReport};
use bountyboard::core::services::PresencePoints;
use bountyboard::scoring::Scorer;
use tempfile::TempDir;

use crate::common::{TestEvent, catalog, corrupted, originals, write_site};

#[test]
fn test_fully_fixed_site_scores_max() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    write_site(
        &root,
        &[
            ("index.html", &originals(1, Category::Markup)),
            ("checkout.css", &originals(1, Category::Style)),
        ],
    );

    let report = event.ctx.scorer.score_detailed(&root, 1);
    assert_eq!(report.basis, ScoreBasis::Catalog);
    assert_eq!(report.total_score, catalog(1).max_score());
    assert_eq!(report.fixed_count, report.total_count);
}

#[test]
fn test_rescoring_same_directory_is_stable() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    let markup = format!("{}\n{}", originals(2, Category::Markup), corrupted(2, Category::Markup));
    write_site(
        &root,
        &[("profile.html", &markup), ("social.css", &originals(2, Category::Style))],
    );

    let first = event.ctx.scorer.score(&root, 2);
    let second = event.ctx.scorer.score(&root, 2);
    assert_eq!(first, second);
    assert!(first > 0);
    assert!(first < catalog(2).max_score());

    let report = event.ctx.scorer.score_detailed(&root, 2);
    let again = event.ctx.scorer.score_detailed(&root, 2);
    assert_eq!(report.total_score, first);
    let fixed = |r: &ScoreReport| {
        r.defects.iter().map(|d| d.fixed).collect::<Vec<_>>()
    };
    assert_eq!(fixed(&report), fixed(&again));
}

#[test]
fn test_missing_stylesheet_scores_markup_only() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    write_site(&root, &[("login.html", &originals(3, Category::Markup))]);

    let report = event.ctx.scorer.score_detailed(&root, 3);
    let markup = report.per_category[&Category::Markup];
    let style = report.per_category[&Category::Style];
    assert_eq!(markup.fixed, markup.total);
    assert_eq!(style.fixed, 0);
    assert_eq!(style.points, 0);
    assert_eq!(report.total_score, markup.points);
}

#[test]
fn test_broken_copy_scores_zero() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    write_site(
        &root,
        &[
            ("article.html", &corrupted(4, Category::Markup)),
            ("layout.css", &corrupted(4, Category::Style)),
        ],
    );
    assert_eq!(event.ctx.scorer.score(&root, 4), 0);
}

#[test]
fn test_files_of_other_sites_are_ignored() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    // Site 2 expects profile.html and social.css
    write_site(
        &root,
        &[
            ("index.html", &originals(2, Category::Markup)),
            ("checkout.css", &originals(2, Category::Style)),
        ],
    );
    assert_eq!(event.ctx.scorer.score(&root, 2), 0);
}

#[test]
fn test_unknown_site_and_missing_root() {
    let event = TestEvent::new();
    let root = event.path().join("submission");
    write_site(&root, &[("index.html", "<!DOCTYPE html>")]);

    assert_eq!(event.ctx.scorer.score_detailed(&root, 6).basis, ScoreBasis::UnknownSite);
    assert_eq!(event.ctx.scorer.score(&root, 6), 0);
    assert_eq!(
        event.ctx.scorer.score_detailed(&event.path().join("absent"), 1).basis,
        ScoreBasis::MissingSubmission
    );
}

#[test]
fn test_presence_scoring_for_site_without_catalog() {
    let mut sites = bountyboard::config::default_sites();
    sites.push(SiteConfig::new(6, "Travel Blog", "trip.html", "trip.css"));
    let scorer = Scorer::new(sites, CatalogSet::default(), PresencePoints::default());

    let dir = TempDir::new().unwrap();
    assert_eq!(scorer.score(dir.path(), 6), 0);

    write_site(dir.path(), &[("trip.css", "broken {")]);
    assert_eq!(scorer.score(dir.path(), 6), 100);

    write_site(dir.path(), &[("trip.html", "")]);
    let report = scorer.score_detailed(dir.path(), 6);
    assert_eq!(report.total_score, 300);
    assert_eq!(report.basis, ScoreBasis::Presence);
}

#[test]
fn test_configured_presence_points() {
    let mut config = AppConfig::default();
    config.scoring.markup_presence_points = 7;
    config.scoring.stylesheet_presence_points = 3;
    let dir = TempDir::new().unwrap();
    config.scoring.catalog_dir = Some(dir.path().join("catalogs"));
    std::fs::create_dir_all(dir.path().join("catalogs")).unwrap();

    let scorer = Scorer::from_config(&config).unwrap();
    let root = dir.path().join("submission");
    write_site(&root, &[("index.html", "x"), ("checkout.css", "y")]);
    assert_eq!(scorer.score(&root, 1), 10);
}
