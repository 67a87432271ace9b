//! Request handlers, one module per resource.

pub mod auth;
pub mod focus_sessions;
pub mod insights;
pub mod profile;
pub mod stats;
pub mod tasks;
