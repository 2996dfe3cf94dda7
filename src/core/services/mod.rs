//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`verifier`] - Decide whether one defect is fixed in a corpus
//! - [`scorer`] - Aggregate verification over a site catalog
//! - [`ranking`] - Best-score replacement and leaderboard order

pub mod ranking;
pub mod scorer;
pub mod verifier;

pub use ranking::{apply_score, compare_entries, rank};
pub use scorer::{PresencePoints, score_corpora};
pub use verifier::{DefectKind, classify, verify};
