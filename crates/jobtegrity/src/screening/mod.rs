//! Scam-risk screening for job postings.
//!
//! Scoring is a pure function of the submitted record: detectors run in a fixed
//! order, their weights are subtracted from 100, and the clamped score selects a
//! risk tier and the advice shown to the user.

pub mod catalog;
pub mod domain;
mod policy;
mod rules;
pub mod text;

#[cfg(test)]
mod tests;

pub use domain::{
    JobInput, JobScreeningResult, JobType, RiskCode, RiskFactor, RiskLevel, RiskSeverity,
    WorkMode,
};

use rules::ScreeningContext;
use tracing::debug;

/// Screen a single posting.
pub fn screen_job(job: &JobInput) -> JobScreeningResult {
    let context = ScreeningContext::new(job);
    let factors = rules::collect_factors(&context);

    let score = policy::aggregate_score(&factors);
    let risk_level = RiskLevel::from_score(score);
    let suggestions = policy::suggestions_for(&factors);
    let summary = policy::summarize(risk_level, score, factors.len());

    debug!(
        score,
        risk_level = risk_level.label(),
        factors = factors.len(),
        "job posting screened"
    );

    JobScreeningResult {
        score,
        risk_level,
        factors,
        summary,
        suggestions,
    }
}

/// Screen free text with no structured fields, e.g. a pasted recruiter message.
pub fn quick_score_from_text(description: &str) -> JobScreeningResult {
    screen_job(&JobInput::from_text(description))
}
