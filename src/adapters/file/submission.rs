//! Submission directory access
//!
//! Reading never fails: a missing or unreadable file is an empty corpus.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use log::{debug, warn};

/// Process-wide counter distinguishing submissions stored in the same instant
static SUBMISSION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Read one designated file of a submission
///
/// Missing files, unreadable files and invalid UTF-8 all yield an empty
/// corpus so every content check on it fails.
#[must_use]
pub fn read_corpus(path: &Path) -> String {
    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Treating {} as empty: {e}", path.display());
            String::new()
        },
    }
}

/// Store a submission in a directory of its own under `team_dir`
///
/// The directory is named `<UTC timestamp>-<sequence>` and claimed with an
/// exclusive create, so no two submissions ever share or delete one another's
/// files. Each file is a `(relative path, content)` pair. Returns the new
/// directory.
pub fn store_submission(team_dir: &Path, files: &[(&str, &str)]) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(team_dir)?;
    let dir = loop {
        let name = format!(
            "{}-{:06}",
            Utc::now().format("%Y%m%dT%H%M%S%.6fZ"),
            SUBMISSION_SEQ.fetch_add(1, Ordering::Relaxed)
        );
        let candidate = team_dir.join(name);
        match fs::create_dir(&candidate) {
            Ok(()) => break candidate,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {},
            Err(e) => return Err(e.into()),
        }
    };

    for (name, content) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    }
    debug!("Stored submission in {}", dir.display());
    Ok(dir)
}
