use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::screening::{JobInput, JobScreeningResult, RiskLevel};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScreeningId(pub String);

impl std::fmt::Display for ScreeningId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored screening: the submitted posting, its result and when it was scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningRecord {
    pub id: ScreeningId,
    pub job: JobInput,
    pub result: JobScreeningResult,
    pub screened_at: DateTime<Utc>,
}

impl ScreeningRecord {
    pub fn summary_view(&self) -> HistorySummaryView {
        HistorySummaryView {
            id: self.id.clone(),
            title: self.job.title.clone(),
            company_name: self.job.company_name.clone(),
            risk_level: self.result.risk_level,
            score: self.result.score,
            screened_at: self.screened_at,
        }
    }
}

/// One row of the recent-analyses listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummaryView {
    pub id: ScreeningId,
    pub title: String,
    pub company_name: String,
    pub risk_level: RiskLevel,
    pub score: u8,
    pub screened_at: DateTime<Utc>,
}

/// Body of the free-text endpoint, e.g. a pasted recruiter email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickScreenRequest {
    pub description: String,
}
