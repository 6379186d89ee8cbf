use clap::Args;
use jobtegrity::error::AppError;
use jobtegrity::history::{validate_job, ScreeningServiceError};
use jobtegrity::import::JobCsvImporter;
use jobtegrity::screening::{quick_score_from_text, screen_job, JobInput, JobScreeningResult};
use std::io::Read;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct ScreenArgs {
    /// JSON file holding a full posting (camelCase field names)
    #[arg(long)]
    pub(crate) job: Option<PathBuf>,
    #[arg(long)]
    pub(crate) title: Option<String>,
    #[arg(long)]
    pub(crate) company: Option<String>,
    #[arg(long)]
    pub(crate) website: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    /// Application link shared with candidates
    #[arg(long)]
    pub(crate) link: Option<String>,
    #[arg(long)]
    pub(crate) salary_min: Option<f64>,
    #[arg(long)]
    pub(crate) salary_max: Option<f64>,
    #[arg(long)]
    pub(crate) description: Option<String>,
    /// Read the description from a file instead of --description
    #[arg(long, conflicts_with = "description")]
    pub(crate) description_file: Option<PathBuf>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct QuickArgs {
    /// Text to screen; read from stdin when omitted or "-"
    pub(crate) text: Option<String>,
    /// Print the result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct BatchArgs {
    /// Job listing CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Print results as a JSON array
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_screen(args: ScreenArgs) -> Result<(), AppError> {
    let json = args.json;
    let job = job_from_args(args)?;
    validate_job(&job).map_err(ScreeningServiceError::from)?;

    let result = screen_job(&job);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} @ {}", job.title, job.company_name);
        print!("{}", render_result(&result));
    }
    Ok(())
}

pub(crate) fn run_quick(args: QuickArgs) -> Result<(), AppError> {
    let text = match args.text {
        Some(text) if text != "-" => text,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        return Err(AppError::InvalidInput("no text to screen".to_string()));
    }

    let result = quick_score_from_text(&text);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_result(&result));
    }
    Ok(())
}

pub(crate) fn run_batch(args: BatchArgs) -> Result<(), AppError> {
    let jobs = JobCsvImporter::from_path(&args.csv)?;
    let screened: Vec<(JobInput, JobScreeningResult)> = jobs
        .into_iter()
        .map(|job| {
            let result = screen_job(&job);
            (job, result)
        })
        .collect();

    if args.json {
        let payload: Vec<serde_json::Value> = screened
            .iter()
            .map(|(job, result)| {
                serde_json::json!({
                    "title": job.title,
                    "companyName": job.company_name,
                    "result": result,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Screened {} posting(s) from {}", screened.len(), args.csv.display());
    for (job, result) in &screened {
        println!(
            "  {:>3}/100  {:<9}  {} @ {} ({} factor(s))",
            result.score,
            result.risk_level.label(),
            job.title,
            job.company_name,
            result.factors.len()
        );
    }
    Ok(())
}

/// Assemble a posting from a JSON file or from individual flags.
pub(crate) fn job_from_args(args: ScreenArgs) -> Result<JobInput, AppError> {
    if let Some(path) = args.job {
        let raw = std::fs::read_to_string(path)?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let description = match (args.description, args.description_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => {
            return Err(AppError::InvalidInput(
                "provide --description, --description-file or --job".to_string(),
            ))
        }
    };

    Ok(JobInput {
        title: args.title.unwrap_or_default(),
        company_name: args.company.unwrap_or_default(),
        company_website: args.website,
        contact_email: args.email,
        application_link: args.link,
        salary_min: args.salary_min,
        salary_max: args.salary_max,
        description,
        ..JobInput::default()
    })
}

pub(crate) fn render_result(result: &JobScreeningResult) -> String {
    let mut out = format!("{}\n", result.summary);

    if !result.factors.is_empty() {
        out.push_str("Risk factors:\n");
        for factor in &result.factors {
            out.push_str(&format!(
                "  - [{}] {} ({:+})",
                factor.severity.label(),
                factor.label,
                -factor.weight
            ));
            if let Some(details) = &factor.details {
                out.push_str(&format!(": {details}"));
            }
            out.push('\n');
        }
    }

    if !result.suggestions.is_empty() {
        out.push_str("Suggestions:\n");
        for suggestion in &result.suggestions {
            out.push_str(&format!("  * {suggestion}\n"));
        }
    }

    out
}
