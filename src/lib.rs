//! bountyboard - Bug bounty event scoring
//!
//! Participants fix a deliberately broken website; this library verifies
//! which catalogued defects they fixed, scores the submission and keeps a
//! best-score leaderboard.
//!
//! - [`core`] - Domain models, port traits and the pure verification logic
//! - [`adapters`] - File and TOML backed implementations of the ports
//! - [`scoring`] - Submission scoring against files on disk
//! - [`leaderboard`] - Serialized best-score leaderboard
//! - [`api`] - HTTP-agnostic handlers shared by the server and the CLI

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod api;
pub mod config;
pub mod context;
pub mod core;
pub mod leaderboard;
pub mod output;
pub mod paths;
pub mod scoring;
