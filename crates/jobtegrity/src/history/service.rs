use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{HistorySummaryView, ScreeningId, ScreeningRecord};
use super::repository::{HistoryRepository, RepositoryError};
use crate::config::HistoryConfig;
use crate::screening::{quick_score_from_text, screen_job, JobInput, JobScreeningResult};

/// Service composing submission checks, the screening engine and the history store.
pub struct ScreeningService<R> {
    repository: Arc<R>,
    history_limit: usize,
}

static SCREENING_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_screening_id() -> ScreeningId {
    let id = SCREENING_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ScreeningId(format!("scr-{id:06}"))
}

impl<R> ScreeningService<R>
where
    R: HistoryRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: HistoryConfig) -> Self {
        Self {
            repository,
            history_limit: config.limit.max(1),
        }
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit
    }

    /// Screen a full posting and record the outcome.
    pub fn submit(&self, job: JobInput) -> Result<ScreeningRecord, ScreeningServiceError> {
        validate_job(&job)?;
        let result = screen_job(&job);
        self.store(job, result)
    }

    /// Screen free text only, as the paste-an-email flow does.
    pub fn submit_text(&self, description: &str) -> Result<ScreeningRecord, ScreeningServiceError> {
        if description.trim().is_empty() {
            return Err(ValidationError::MissingField("description").into());
        }
        let result = quick_score_from_text(description);
        self.store(JobInput::from_text(description), result)
    }

    pub fn get(&self, id: &ScreeningId) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self) -> Result<Vec<HistorySummaryView>, ScreeningServiceError> {
        let records = self.repository.recent(self.history_limit)?;
        Ok(records.iter().map(ScreeningRecord::summary_view).collect())
    }

    pub fn clear(&self) -> Result<(), ScreeningServiceError> {
        self.repository.clear()?;
        info!("screening history cleared");
        Ok(())
    }

    fn store(
        &self,
        job: JobInput,
        result: JobScreeningResult,
    ) -> Result<ScreeningRecord, ScreeningServiceError> {
        let record = ScreeningRecord {
            id: next_screening_id(),
            job,
            result,
            screened_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            id = %stored.id,
            score = stored.result.score,
            risk_level = stored.result.risk_level.label(),
            "screening recorded"
        );
        Ok(stored)
    }
}

/// Checks the fields a posting must carry before it is screened.
pub fn validate_job(job: &JobInput) -> Result<(), ValidationError> {
    let required = [
        ("title", &job.title),
        ("companyName", &job.company_name),
        ("description", &job.description),
    ];

    match required
        .iter()
        .find(|(_, value)| value.trim().is_empty())
    {
        Some((field, _)) => Err(ValidationError::MissingField(*field)),
        None => Ok(()),
    }
}

/// Submission rejected before screening.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Error raised by the screening service.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
