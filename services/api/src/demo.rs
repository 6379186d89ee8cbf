use crate::infra::InMemoryHistoryRepository;
use crate::report::render_result;
use clap::Args;
use jobtegrity::config::HistoryConfig;
use jobtegrity::error::AppError;
use jobtegrity::history::ScreeningService;
use jobtegrity::screening::{JobInput, JobType, WorkMode};
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only print the history table, not each screening in full
    #[arg(long)]
    pub(crate) brief: bool,
}

const PASTED_EMAIL: &str = "Hello, Congratulations!!!!! You have been selected for a \
REMOTE DATA ENTRY position with no experience required. Before onboarding you must pay \
the equipment fee with a gift card. Our hiring manager will interview you on Telegram. \
Send your bank account and routing number for direct deposit.";

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryHistoryRepository::with_capacity(
        HistoryConfig::default().limit,
    ));
    let service = ScreeningService::new(repository, HistoryConfig::default());

    println!("Job posting screening demo");

    for job in sample_postings() {
        let record = service.submit(job)?;
        if !args.brief {
            println!("\n{} @ {} [{}]", record.job.title, record.job.company_name, record.id);
            print!("{}", render_result(&record.result));
        }
    }

    let pasted = service.submit_text(PASTED_EMAIL)?;
    if !args.brief {
        println!("\nPasted recruiter email [{}]", pasted.id);
        print!("{}", render_result(&pasted.result));
    }

    println!("\nRecent screenings (newest first)");
    for row in service.recent()? {
        let company = if row.company_name.is_empty() {
            "-"
        } else {
            row.company_name.as_str()
        };
        println!(
            "  {}  {:>3}/100  {:<9}  {} @ {}",
            row.id,
            row.score,
            row.risk_level.label(),
            row.title,
            company
        );
    }

    Ok(())
}

fn sample_postings() -> Vec<JobInput> {
    vec![
        JobInput {
            title: "Site Reliability Engineer".to_string(),
            company_name: "Globex".to_string(),
            company_website: Some("https://globex.io".to_string()),
            location: Some("Austin, TX".to_string()),
            salary_min: Some(140_000.0),
            salary_max: Some(175_000.0),
            currency: Some("USD".to_string()),
            job_type: Some(JobType::FullTime),
            work_mode: Some(WorkMode::Hybrid),
            contact_email: Some("talent@globex.io".to_string()),
            application_link: Some("https://globex.io/careers/sre".to_string()),
            description: "Run the Kubernetes platform that powers our logistics products. \
                Five years of production operations experience preferred."
                .to_string(),
            ..JobInput::default()
        },
        JobInput {
            title: "Customer Support Associate".to_string(),
            company_name: "Brightline Services".to_string(),
            contact_email: Some("brightline.hr@outlook.com".to_string()),
            application_link: Some("https://cutt.ly/brightline".to_string()),
            job_type: Some(JobType::PartTime),
            work_mode: Some(WorkMode::Remote),
            description: "Answer customer chats from home. Weekly pay guaranteed!".to_string(),
            ..JobInput::default()
        },
        JobInput {
            title: "Payroll Assistant".to_string(),
            company_name: "Northwind Holdings".to_string(),
            company_website: Some("https://northwind.example".to_string()),
            contact_email: Some("recruiting@gmail.com".to_string()),
            salary_max: Some(240_000.0),
            description: "Entry level role, no experience needed. Interview on WhatsApp. \
                Processing fee required before start."
                .to_string(),
            ..JobInput::default()
        },
    ]
}
