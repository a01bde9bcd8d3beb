//! Educational credit qualification service.
//!
//! The crate hosts the full qualification workflow behind a small library
//! API: intake sanitization, the two-stage heuristic scoring engine,
//! plain-language explanations, an optional remote scoring delegate with
//! offline fallback, and the axum router exposing it all over HTTP.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
