use jobtegrity::history::{HistoryRepository, RepositoryError, ScreeningId, ScreeningRecord};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Newest-first screening history that drops the oldest entry once full.
#[derive(Clone)]
pub(crate) struct InMemoryHistoryRepository {
    records: Arc<Mutex<VecDeque<ScreeningRecord>>>,
    capacity: usize,
}

impl InMemoryHistoryRepository {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn guard(&self) -> Result<MutexGuard<'_, VecDeque<ScreeningRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("history mutex poisoned".to_string()))
    }
}

impl HistoryRepository for InMemoryHistoryRepository {
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.guard()?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push_front(record.clone());
        guard.truncate(self.capacity);
        Ok(record)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.guard()?;
        Ok(guard.iter().take(limit).cloned().collect())
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.guard()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jobtegrity::screening::{screen_job, JobInput};

    fn record(id: &str) -> ScreeningRecord {
        let job = JobInput::from_text("Send your resume to the hiring team.");
        ScreeningRecord {
            id: ScreeningId(id.to_string()),
            result: screen_job(&job),
            job,
            screened_at: Utc::now(),
        }
    }

    #[test]
    fn keeps_newest_records_up_to_capacity() {
        let repository = InMemoryHistoryRepository::with_capacity(2);
        for id in ["scr-a", "scr-b", "scr-c"] {
            repository.insert(record(id)).expect("insert succeeds");
        }

        let ids: Vec<String> = repository
            .recent(10)
            .expect("recent succeeds")
            .into_iter()
            .map(|record| record.id.0)
            .collect();
        assert_eq!(ids, vec!["scr-c".to_string(), "scr-b".to_string()]);
        assert!(repository
            .fetch(&ScreeningId("scr-a".to_string()))
            .expect("fetch succeeds")
            .is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let repository = InMemoryHistoryRepository::with_capacity(5);
        repository.insert(record("scr-a")).expect("first insert");
        assert!(matches!(
            repository.insert(record("scr-a")),
            Err(RepositoryError::Conflict)
        ));
    }

    #[test]
    fn clear_empties_history() {
        let repository = InMemoryHistoryRepository::with_capacity(0);
        repository.insert(record("scr-a")).expect("insert succeeds");
        repository.clear().expect("clear succeeds");
        assert!(repository.recent(5).expect("recent succeeds").is_empty());
    }
}
