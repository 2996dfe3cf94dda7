//! Core domain logic for bountyboard
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (defects, catalogs, reports, leaderboard, timer, teams)
//! - `services/` - Verification, scoring and ranking
//! - `ports/` - Trait definitions for persisted state

pub mod models;
pub mod ports;
pub mod services;
