//! Batch intake of job listings exported as CSV.

mod parser;

use crate::screening::JobInput;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum JobImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for JobImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobImportError::Io(err) => write!(f, "failed to read job listing export: {}", err),
            JobImportError::Csv(err) => write!(f, "invalid job listing CSV data: {}", err),
        }
    }
}

impl std::error::Error for JobImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobImportError::Io(err) => Some(err),
            JobImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for JobImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JobImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads job listings with snake_case headers (`title`, `company_name`,
/// `description`, plus any optional `JobInput` field).
pub struct JobCsvImporter;

impl JobCsvImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<JobInput>, JobImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<JobInput>, JobImportError> {
        let jobs = parser::parse_rows(reader)?;
        tracing::debug!(rows = jobs.len(), "job listing export parsed");
        Ok(jobs)
    }
}
