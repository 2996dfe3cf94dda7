//! Integration tests for the bountyboard CLI
//!
//! Each test runs the binary against its own event directory holding a
//! config file, a small catalog and the persisted state.

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const CATALOG: &str = r#"
[site]
id = 1
name = "E-commerce Site"

[[defect]]
id = "html_doctype"
tier = "easy"
original = "<!DOCTYPE html>"
modified = ""

[[defect]]
id = "html_body_tag"
tier = "medium"
original = "<body>"
modified = "<bod>"

[[defect]]
id = "css_semicolon"
tier = "hard"
original = "color: #333;"
modified = "color: #333"
"#;

/// An event directory with `bountyboard.toml` pointing at its own state
struct Event {
    dir: TempDir,
}

impl Event {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let catalogs = dir.path().join("catalogs");
        fs::create_dir_all(&catalogs).unwrap();
        fs::write(catalogs.join("site-1.toml"), CATALOG).unwrap();
        fs::write(
            dir.path().join("bountyboard.toml"),
            format!(
                "[storage]\ndata_dir = '{}'\n\n[scoring]\ncatalog_dir = '{}'\n",
                dir.path().join("data").display(),
                catalogs.display()
            ),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn config(&self) -> PathBuf {
        self.path().join("bountyboard.toml")
    }

    /// The binary, configured for this event, with colors off
    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("bountyboard"));
        cmd.arg("--config")
            .arg(self.config())
            .env("NO_COLOR", "1")
            .env("CLICOLOR", "0")
            .env_remove("BOUNTYBOARD_PORT")
            .env_remove("BOUNTYBOARD_ADMIN_PASSWORD");
        cmd
    }

    fn submission(&self, markup: &str, stylesheet: &str) -> PathBuf {
        let root = self.path().join("submission");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("index.html"), markup).unwrap();
        fs::write(root.join("checkout.css"), stylesheet).unwrap();
        root
    }
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// =============================================================================
// SCORING
// =============================================================================

#[test]
fn test_score_fully_fixed_submission() {
    let event = Event::new();
    let root = event.submission("<!DOCTYPE html>\n<body>\n</body>", "p { color: #333; }");

    event
        .cmd()
        .args(["score", "--site", "1"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 60 (3/3 defects fixed)"));
}

#[test]
fn test_score_json_report() {
    let event = Event::new();
    let root = event.submission("<html>\n<bod>\n</html>", "p { color: #333; }");

    let output = event
        .cmd()
        .args(["--json", "score", "--site", "1"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = json_stdout(&output);
    assert_eq!(json["site_id"], 1);
    assert_eq!(json["total_score"], 30);
    assert_eq!(json["fixed_count"], 1);
    assert_eq!(json["basis"], "catalog");
}

#[test]
fn test_score_unknown_site_is_zero() {
    let event = Event::new();
    let root = event.submission("<!DOCTYPE html>", "");

    let output = event
        .cmd()
        .args(["--json", "score", "--site", "42"])
        .arg(&root)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["total_score"], 0);
    assert_eq!(json["basis"], "unknown_site");
}

#[test]
fn test_score_site_without_catalog_uses_presence() {
    let event = Event::new();
    let root = event.path().join("submission");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("profile.html"), "<p>hi</p>").unwrap();

    event
        .cmd()
        .args(["score", "--site", "2"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("scored by file presence"))
        .stdout(predicate::str::contains("Score: 200"));
}

// =============================================================================
// EVENT ADMINISTRATION
// =============================================================================

#[test]
fn test_empty_leaderboard() {
    let event = Event::new();
    event
        .cmd()
        .arg("leaderboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("No scores yet."));
}

#[test]
fn test_team_roster_lifecycle() {
    let event = Event::new();

    event
        .cmd()
        .args(["team", "add", "Bug Squashers", "squash", "--site", "1"])
        .assert()
        .success();

    event
        .cmd()
        .args(["team", "add", "Bug Squashers", "again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let csv = event.path().join("roster.csv");
    fs::write(&csv, "Pixel Fixers,pixel,3\nBug Squashers,dup,1\n").unwrap();
    event
        .cmd()
        .args(["team", "import"])
        .arg(&csv)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 team(s) imported, 1 skipped"));

    let output = event.cmd().args(["--json", "team", "list"]).output().unwrap();
    let json = json_stdout(&output);
    let teams = json["teams"].as_array().unwrap();
    assert_eq!(teams.len(), 2);
    assert!(!String::from_utf8_lossy(&output.stdout).contains("password"));

    event
        .cmd()
        .args(["team", "remove", "Pixel Fixers"])
        .assert()
        .success();
    event
        .cmd()
        .args(["team", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bug Squashers"))
        .stdout(predicate::str::contains("Pixel Fixers").not());
}

#[test]
fn test_timer_lifecycle() {
    let event = Event::new();

    event
        .cmd()
        .args(["timer", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stopped"));

    event
        .cmd()
        .args(["timer", "start", "--minutes", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("running"));

    let output = event.cmd().args(["--json", "timer", "status"]).output().unwrap();
    let json = json_stdout(&output);
    assert_eq!(json["status"], "running");
    assert_eq!(json["duration_minutes"], 30);
    assert_eq!(json["active"], true);

    event
        .cmd()
        .args(["timer", "start", "--minutes", "0"])
        .assert()
        .failure();

    event.cmd().args(["timer", "reset"]).assert().success();
    let output = event.cmd().args(["--json", "timer", "status"]).output().unwrap();
    assert_eq!(json_stdout(&output)["start_time"], serde_json::Value::Null);
}

#[test]
fn test_score_override_requires_entry() {
    let event = Event::new();
    event
        .cmd()
        .args(["scores", "set", "ghost", "100", "60"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No leaderboard entry"));

    event.cmd().args(["scores", "reset"]).assert().success();
}

#[test]
fn test_catalog_listing() {
    let event = Event::new();

    let output = event.cmd().args(["--json", "catalog"]).output().unwrap();
    let json = json_stdout(&output);
    let sites = json["sites"].as_array().unwrap();
    assert_eq!(sites.len(), 5);
    assert_eq!(sites[0]["has_catalog"], true);
    assert_eq!(sites[1]["has_catalog"], false);

    event
        .cmd()
        .args(["catalog", "--site", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("html_body_tag"));
}

#[test]
fn test_missing_config_file_fails() {
    let event = Event::new();
    assert_cmd::Command::new(cargo::cargo_bin!("bountyboard"))
        .args(["--config"])
        .arg(event.path().join("absent.toml"))
        .arg("leaderboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}
