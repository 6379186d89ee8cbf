use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::HistoryConfig;
use crate::history::domain::{ScreeningId, ScreeningRecord};
use crate::history::repository::{HistoryRepository, RepositoryError};
use crate::history::{history_router, ScreeningService};
use crate::screening::JobInput;

pub(super) fn corporate_posting() -> JobInput {
    JobInput {
        title: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        company_website: Some("https://acme.com".to_string()),
        contact_email: Some("hiring@acme.com".to_string()),
        description: "Standard job post".to_string(),
        ..JobInput::default()
    }
}

pub(super) fn fee_scam_posting() -> JobInput {
    JobInput {
        title: "Package Handler".to_string(),
        company_name: "Quick Logistics".to_string(),
        contact_email: Some("quick.logistics@gmail.com".to_string()),
        description: "There is a training fee and equipment fee. Pay by gift card.".to_string(),
        ..JobInput::default()
    }
}

pub(super) fn build_service(
    limit: usize,
) -> (ScreeningService<MemoryHistory>, Arc<MemoryHistory>) {
    let repository = Arc::new(MemoryHistory::default());
    let service = ScreeningService::new(repository.clone(), HistoryConfig { limit });
    (service, repository)
}

#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    pub(super) records: Arc<Mutex<VecDeque<ScreeningRecord>>>,
}

impl MemoryHistory {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("history mutex poisoned").len()
    }
}

impl HistoryRepository for MemoryHistory {
    fn insert(&self, record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("history mutex poisoned");
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push_front(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().find(|record| &record.id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        let guard = self.records.lock().expect("history mutex poisoned");
        Ok(guard.iter().take(limit).cloned().collect())
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.records.lock().expect("history mutex poisoned").clear();
        Ok(())
    }
}

pub(super) struct UnavailableHistory;

impl HistoryRepository for UnavailableHistory {
    fn insert(&self, _record: ScreeningRecord) -> Result<ScreeningRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn fetch(&self, _id: &ScreeningId) -> Result<Option<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<ScreeningRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) fn router_with_service(service: ScreeningService<MemoryHistory>) -> axum::Router {
    history_router(Arc::new(service))
}
