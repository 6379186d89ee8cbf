use super::domain::{ScreeningId, ScreeningRecord};

/// Storage abstraction so the service can be exercised without a real backend.
pub trait HistoryRepository: Send + Sync {
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError>;
    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError>;
    /// Newest first, at most `limit` entries.
    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError>;
    fn clear(&self) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
