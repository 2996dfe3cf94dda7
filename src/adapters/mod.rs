//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `toml/` - Defect catalog files (built-in and on disk)
//! - `file/` - JSON files for leaderboard, timer and roster, plus submission directories

pub mod file;
pub mod toml;
