//! Tests for the HTTP-agnostic API handlers

use bountyboard::api::{
    self as api, AddTeamRequest, ErrorCode, SetScoreRequest, StartTimerRequest, SubmitRequest,
    UpdateTeamRequest,
};
use bountyboard::core::models::{Category, TimerStatus};

use crate::common::{TestEvent, catalog, originals};

fn add_team(event: &TestEvent, name: &str, password: &str, site_id: Option<u32>) {
    api::add_team(
        &event.ctx,
        &AddTeamRequest {
            name: name.to_string(),
            password: password.to_string(),
            site_id,
        },
    )
    .unwrap();
}

fn start(event: &TestEvent, minutes: u32) {
    api::start_timer(&event.ctx, &StartTimerRequest { duration_minutes: minutes }).unwrap();
}

fn submission(team: &str, password: &str, markup: Option<String>, stylesheet: Option<String>) -> SubmitRequest {
    SubmitRequest {
        team: team.to_string(),
        password: password.to_string(),
        markup,
        stylesheet,
    }
}

#[test]
fn test_submission_flow() {
    let event = TestEvent::new();
    add_team(&event, "Bug Squashers", "squash", Some(1));

    let full = submission(
        "Bug Squashers",
        "squash",
        Some(originals(1, Category::Markup)),
        Some(originals(1, Category::Style)),
    );

    // Closed until the timer runs
    let err = api::submit(&event.ctx, &full).unwrap_err();
    assert_eq!(err.code, ErrorCode::Forbidden);

    start(&event, 60);
    let err = api::submit(&event.ctx, &submission("Bug Squashers", "wrong", None, None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthorized);

    let result = api::submit(&event.ctx, &full).unwrap();
    assert_eq!(result.score, catalog(1).max_score());
    assert_eq!(result.max_score, 900);
    assert!(result.leaderboard_updated);
    let stored: Vec<_> = std::fs::read_dir(event.data_dir().join("uploads/bug-squashers"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].join("index.html").is_file());

    let partial = submission(
        "Bug Squashers",
        "squash",
        Some(originals(1, Category::Markup)),
        None,
    );
    let result = api::submit(&event.ctx, &partial).unwrap();
    assert!(result.score < catalog(1).max_score());
    assert!(!result.leaderboard_updated);

    let board = api::get_leaderboard(&event.ctx).unwrap();
    assert_eq!(board.entries.len(), 1);
    assert_eq!(board.entries[0].rank, 1);
    assert_eq!(board.entries[0].score, catalog(1).max_score());
}

#[test]
fn test_teams_sharing_a_slug_are_scored_on_their_own_files() {
    let event = TestEvent::new();
    add_team(&event, "Team A", "alpha", Some(1));
    add_team(&event, "team-a", "bravo", Some(1));
    start(&event, 60);

    let full = submission(
        "Team A",
        "alpha",
        Some(originals(1, Category::Markup)),
        Some(originals(1, Category::Style)),
    );
    let junk = submission("team-a", "bravo", Some("<p>nothing fixed</p>".to_string()), None);

    let (full_scores, junk_scores) = std::thread::scope(|s| {
        let ctx = &event.ctx;
        let fixer = s.spawn(|| {
            (0..100)
                .map(|_| api::submit(ctx, &full).unwrap().score)
                .collect::<Vec<_>>()
        });
        let breaker = s.spawn(|| {
            (0..100)
                .map(|_| api::submit(ctx, &junk).unwrap().score)
                .collect::<Vec<_>>()
        });
        (fixer.join().unwrap(), breaker.join().unwrap())
    });

    let max = catalog(1).max_score();
    assert!(full_scores.iter().all(|score| *score == max));
    assert!(junk_scores.iter().all(|score| *score < max));

    let board = api::get_leaderboard(&event.ctx).unwrap();
    assert_eq!(board.entries[0].participant, "Team A");
    assert_eq!(board.entries[0].score, max);
}

#[test]
fn test_submission_rejections() {
    let event = TestEvent::new();
    add_team(&event, "drifters", "pw", None);
    add_team(&event, "empties", "pw", Some(2));
    start(&event, 10);

    let err = api::submit(&event.ctx, &submission("drifters", "pw", Some("x".into()), None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);

    let err = api::submit(&event.ctx, &submission("empties", "pw", None, None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
    assert!(err.message.contains("no files"));

    let err = api::submit(&event.ctx, &submission("nobody", "pw", Some("x".into()), None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Unauthorized);

    api::stop_timer(&event.ctx).unwrap();
    let err = api::submit(&event.ctx, &submission("empties", "pw", Some("x".into()), None)).unwrap_err();
    assert_eq!(err.code, ErrorCode::Forbidden);
}

#[test]
fn test_timer_handlers() {
    let event = TestEvent::new();
    let idle = api::get_timer(&event.ctx).unwrap();
    assert_eq!(idle.status, TimerStatus::Stopped);
    assert!(!idle.active);

    let err = api::start_timer(&event.ctx, &StartTimerRequest { duration_minutes: 0 }).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);

    start(&event, 45);
    let running = api::get_timer(&event.ctx).unwrap();
    assert!(running.active);
    assert_eq!(running.duration_minutes, 45);
    assert!(running.remaining_seconds <= 45 * 60);

    let stopped = api::stop_timer(&event.ctx).unwrap();
    assert!(!stopped.active);
    assert_eq!(stopped.duration_minutes, 45);
    assert!(stopped.start_time.is_some());

    let reset = api::reset_timer(&event.ctx).unwrap();
    assert!(reset.start_time.is_none());
    assert_eq!(reset.duration_minutes, 0);
}

#[test]
fn test_admin_token() {
    let event = TestEvent::new();
    assert_eq!(
        api::require_admin(&event.ctx, None).unwrap_err().code,
        ErrorCode::Unauthorized
    );
    assert_eq!(
        api::require_admin(&event.ctx, Some("guess")).unwrap_err().code,
        ErrorCode::Forbidden
    );
    assert!(api::require_admin(&event.ctx, Some("admin123")).is_ok());
}

#[test]
fn test_team_management() {
    let event = TestEvent::new();
    add_team(&event, "alpha", "a", Some(1));

    let dup = api::add_team(
        &event.ctx,
        &AddTeamRequest {
            name: "alpha".into(),
            password: "b".into(),
            site_id: None,
        },
    )
    .unwrap_err();
    assert_eq!(dup.code, ErrorCode::Conflict);

    let bad_site = api::add_team(
        &event.ctx,
        &AddTeamRequest {
            name: "beta".into(),
            password: "b".into(),
            site_id: Some(42),
        },
    )
    .unwrap_err();
    assert_eq!(bad_site.code, ErrorCode::BadRequest);

    let updated = api::update_team(
        &event.ctx,
        "alpha",
        &UpdateTeamRequest {
            site_id: Some(4),
            ..UpdateTeamRequest::default()
        },
    )
    .unwrap();
    assert_eq!(updated.site_id, Some(4));
    assert_eq!(
        api::update_team(&event.ctx, "ghost", &UpdateTeamRequest::default())
            .unwrap_err()
            .code,
        ErrorCode::NotFound
    );

    let listed = api::list_teams(&event.ctx).unwrap();
    let json = serde_json::to_string(&listed).unwrap();
    assert!(json.contains("alpha"));
    assert!(!json.contains("password"));
}

#[test]
fn test_delete_team_clears_its_score() {
    let event = TestEvent::new();
    add_team(&event, "alpha", "a", Some(1));
    event.ctx.leaderboard.record_score("alpha", 1, 100, 60);

    api::delete_team(&event.ctx, "alpha").unwrap();
    assert!(api::get_leaderboard(&event.ctx).unwrap().entries.is_empty());
    assert_eq!(
        api::delete_team(&event.ctx, "alpha").unwrap_err().code,
        ErrorCode::NotFound
    );
}

#[test]
fn test_import_teams() {
    let event = TestEvent::new();
    add_team(&event, "alpha", "a", None);

    let result = api::import_teams(&event.ctx, "alpha,x,1\nbeta,b,2\ngamma,c,99\nbroken\n").unwrap();
    assert_eq!(result.added, 2);
    assert_eq!(result.skipped, 1);

    let teams = api::list_teams(&event.ctx).unwrap().teams;
    let gamma = teams.iter().find(|t| t.name == "gamma").unwrap();
    assert_eq!(gamma.site_id, None);
}

#[test]
fn test_score_overrides() {
    let event = TestEvent::new();
    let req = SetScoreRequest {
        score: 50,
        elapsed_seconds: 120,
    };
    assert_eq!(
        api::set_score(&event.ctx, "alpha", &req).unwrap_err().code,
        ErrorCode::NotFound
    );

    event.ctx.leaderboard.record_score("alpha", 1, 10, 60);
    api::set_score(&event.ctx, "alpha", &req).unwrap();
    let entry = &api::get_leaderboard(&event.ctx).unwrap().entries[0];
    assert_eq!(entry.score, 50);
    assert_eq!(entry.elapsed_seconds, 120);

    api::reset_scores(&event.ctx).unwrap();
    assert!(api::get_leaderboard(&event.ctx).unwrap().entries.is_empty());
}

#[test]
fn test_sites_and_catalogs() {
    let event = TestEvent::new();
    let sites = api::list_sites(&event.ctx).unwrap().sites;
    assert_eq!(sites.len(), 5);
    assert!(sites.iter().all(|s| s.has_catalog));

    let data = api::get_site_catalog(&event.ctx, 3).unwrap();
    assert_eq!(data.site.markup_file, "login.html");
    assert_eq!(data.defects.len(), data.site.total_defects);

    assert_eq!(
        api::get_site_catalog(&event.ctx, 9).unwrap_err().code,
        ErrorCode::NotFound
    );
}
