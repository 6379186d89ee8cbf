//! Recent-screenings history: the caller-side collaborator that validates
//! submissions, runs the screening engine and keeps a capped list of outcomes.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{HistorySummaryView, QuickScreenRequest, ScreeningId, ScreeningRecord};
pub use repository::{HistoryRepository, RepositoryError};
pub use router::history_router;
pub use service::{validate_job, ScreeningService, ScreeningServiceError, ValidationError};
