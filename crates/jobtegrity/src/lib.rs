//! Heuristic scam-risk screening for job postings.

pub mod config;
pub mod error;
pub mod history;
pub mod import;
pub mod screening;
pub mod telemetry;
