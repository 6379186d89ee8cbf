use std::collections::BTreeSet;

use crate::screening::domain::{JobInput, JobScreeningResult, JobType, RiskCode, WorkMode};

pub(super) fn job(description: &str) -> JobInput {
    JobInput {
        title: "Operations Analyst".to_string(),
        company_name: "Acme".to_string(),
        description: description.to_string(),
        ..JobInput::default()
    }
}

pub(super) fn corporate_job() -> JobInput {
    JobInput {
        title: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        company_website: Some("https://acme.com".to_string()),
        location: Some("Des Moines, IA".to_string()),
        salary_min: Some(90_000.0),
        salary_max: Some(120_000.0),
        currency: Some("USD".to_string()),
        job_type: Some(JobType::FullTime),
        work_mode: Some(WorkMode::Hybrid),
        contact_email: Some("hiring@acme.com".to_string()),
        application_link: Some("https://acme.com/careers/engineer".to_string()),
        description: "Standard job post".to_string(),
        source: Some("LinkedIn".to_string()),
        posted_at: Some("2025-09-24".to_string()),
    }
}

pub(super) fn scam_job() -> JobInput {
    JobInput {
        title: "Remote Data Entry Clerk".to_string(),
        company_name: "Acme".to_string(),
        company_website: Some("https://acme.com".to_string()),
        contact_email: Some("acme.hr.dept@gmail.com".to_string()),
        application_link: Some("https://bit.ly/acme-apply".to_string()),
        salary_max: Some(250_000.0),
        description: "URGENT HIRING: NO EXPERIENCE REQUIRED!!! Quick money, instant pay. Pay the training fee \
                      by gift card, then send your SSN and bank account details. \
                      Interview on Telegram only!!!"
            .to_string(),
        ..JobInput::default()
    }
}

pub(super) fn codes(result: &JobScreeningResult) -> Vec<RiskCode> {
    result.factors.iter().map(|factor| factor.code).collect()
}

pub(super) fn unique_codes(result: &JobScreeningResult) -> BTreeSet<RiskCode> {
    result.factors.iter().map(|factor| factor.code).collect()
}

pub(super) fn weight_of(result: &JobScreeningResult, code: RiskCode) -> Option<i32> {
    result.factor(code).map(|factor| factor.weight)
}
