//! Domain types and pure derivation logic for the StudyPulse backend.
//!
//! This crate is I/O-free: it holds the task/focus-session vocabulary,
//! the statistics view-model derivations (dashboard, progress, profile,
//! badges), and the insights prompt assembly. Everything here is a plain
//! function over already-fetched data.

pub mod error;
pub mod insights;
pub mod stats;
pub mod task;
pub mod types;
