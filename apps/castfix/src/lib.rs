//! castfix core library.
//!
//! This crate scans a query controller for SQL type-cast mismatches and
//! patches it in place.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `classify`: Maps a database error message to a diagnosis.
//! - `scan`: Per-line report of suspicious SQL fragments.
//! - `patch`: Fallback block replacement and targeted cast rewrites.
//! - `rules`: Rule tables driving scan and patch.
//! - `run`: Locate, report, mutate orchestration.
//! - `models`: Data models for issues, diagnoses, and outcomes.
//! - `output`: Human/JSON printers.
//! - `error`: The shared error type.
//! - `utils`: Supporting helpers.
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod patch;
pub mod rules;
pub mod run;
pub mod scan;
pub mod utils;
