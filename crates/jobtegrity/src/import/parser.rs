use crate::screening::{JobInput, JobType, WorkMode};
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<JobInput>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut jobs = Vec::new();

    for record in csv_reader.deserialize::<JobRow>() {
        jobs.push(record?.into_job());
    }

    Ok(jobs)
}

#[derive(Debug, Deserialize)]
struct JobRow {
    title: String,
    company_name: String,
    description: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company_website: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary_min: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary_max: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    currency: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    job_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    work_mode: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    contact_email: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    application_link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    source: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    posted_at: Option<String>,
}

impl JobRow {
    fn into_job(self) -> JobInput {
        JobInput {
            title: self.title,
            company_name: self.company_name,
            company_website: self.company_website,
            location: self.location,
            salary_min: self.salary_min.as_deref().and_then(parse_amount),
            salary_max: self.salary_max.as_deref().and_then(parse_amount),
            currency: self.currency,
            job_type: self.job_type.as_deref().map(JobType::parse_lenient),
            work_mode: self.work_mode.as_deref().and_then(WorkMode::parse),
            contact_email: self.contact_email,
            application_link: self.application_link,
            description: self.description,
            source: self.source,
            posted_at: self.posted_at,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Accepts exports that format salaries as `$120,000` or `85000.50`.
fn parse_amount(value: &str) -> Option<f64> {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | '-'))
        .collect();
    cleaned.parse::<f64>().ok()
}
