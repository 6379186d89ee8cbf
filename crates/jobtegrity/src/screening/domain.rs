use serde::{Deserialize, Serialize};

/// Job posting as submitted by a user or pulled from a listing export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobInput {
    pub title: String,
    pub company_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_mode: Option<WorkMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_link: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
}

impl JobInput {
    /// Minimal record wrapping free text such as a pasted recruiter email.
    pub fn from_text(description: impl Into<String>) -> Self {
        Self {
            title: "Untitled".to_string(),
            company_name: String::new(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn company_website(&self) -> Option<&str> {
        present(&self.company_website)
    }

    pub fn contact_email(&self) -> Option<&str> {
        present(&self.contact_email)
    }

    pub fn application_link(&self) -> Option<&str> {
        present(&self.application_link)
    }
}

// Only the empty string counts as missing; whitespace is kept and fails extraction later.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
    Temporary,
    Volunteer,
    Other,
}

impl JobType {
    pub fn label(&self) -> &'static str {
        match self {
            JobType::FullTime => "Full-time",
            JobType::PartTime => "Part-time",
            JobType::Contract => "Contract",
            JobType::Internship => "Internship",
            JobType::Temporary => "Temporary",
            JobType::Volunteer => "Volunteer",
            JobType::Other => "Other",
        }
    }

    /// Lenient parse used by importers; unrecognised labels fall back to `Other`.
    pub fn parse_lenient(value: &str) -> Self {
        let key: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match key.as_str() {
            "fulltime" => JobType::FullTime,
            "parttime" => JobType::PartTime,
            "contract" => JobType::Contract,
            "internship" => JobType::Internship,
            "temporary" => JobType::Temporary,
            "volunteer" => JobType::Volunteer,
            _ => JobType::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkMode {
    #[serde(rename = "On-site")]
    OnSite,
    Remote,
    Hybrid,
}

impl WorkMode {
    pub fn label(&self) -> &'static str {
        match self {
            WorkMode::OnSite => "On-site",
            WorkMode::Remote => "Remote",
            WorkMode::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let key: String = value
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect();
        match key.as_str() {
            "onsite" => Some(WorkMode::OnSite),
            "remote" => Some(WorkMode::Remote),
            "hybrid" => Some(WorkMode::Hybrid),
            _ => None,
        }
    }
}

/// Stable identifier of a risk signal; the serialized form is what clients key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCode {
    FreeEmail,
    DomainMismatch,
    ShortenedUrl,
    ShortenedUrlDesc,
    FeeRequest,
    PaymentMethods,
    SensitiveData,
    MessengerInterview,
    TooGood,
    Exclamations,
    AllCaps,
    UnrealisticSalary,
    CorpEmail,
}

impl RiskCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCode::FreeEmail => "free_email",
            RiskCode::DomainMismatch => "domain_mismatch",
            RiskCode::ShortenedUrl => "shortened_url",
            RiskCode::ShortenedUrlDesc => "shortened_url_desc",
            RiskCode::FeeRequest => "fee_request",
            RiskCode::PaymentMethods => "payment_methods",
            RiskCode::SensitiveData => "sensitive_data",
            RiskCode::MessengerInterview => "messenger_interview",
            RiskCode::TooGood => "too_good",
            RiskCode::Exclamations => "exclamations",
            RiskCode::AllCaps => "all_caps",
            RiskCode::UnrealisticSalary => "unrealistic_salary",
            RiskCode::CorpEmail => "corp_email",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Low,
    Medium,
    High,
}

impl RiskSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            RiskSeverity::Low => "low",
            RiskSeverity::Medium => "medium",
            RiskSeverity::High => "high",
        }
    }
}

/// Single detected signal. Positive weights lower the score, negative ones raise it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub code: RiskCode,
    pub label: String,
    pub severity: RiskSeverity,
    pub weight: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl RiskFactor {
    pub(crate) fn new(code: RiskCode, label: &str, severity: RiskSeverity, weight: i32) -> Self {
        Self {
            code,
            label: label.to_string(),
            severity,
            weight,
            details: None,
        }
    }

    pub(crate) fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Legit,
    Caution,
    #[serde(rename = "High Risk")]
    HighRisk,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < 50 {
            RiskLevel::HighRisk
        } else if score < 75 {
            RiskLevel::Caution
        } else {
            RiskLevel::Legit
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Legit => "Legit",
            RiskLevel::Caution => "Caution",
            RiskLevel::HighRisk => "High Risk",
        }
    }
}

/// Outcome of screening one posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobScreeningResult {
    pub score: u8,
    pub risk_level: RiskLevel,
    pub factors: Vec<RiskFactor>,
    pub summary: String,
    pub suggestions: Vec<String>,
}

impl JobScreeningResult {
    pub fn has_factor(&self, code: RiskCode) -> bool {
        self.factors.iter().any(|factor| factor.code == code)
    }

    pub fn factor(&self, code: RiskCode) -> Option<&RiskFactor> {
        self.factors.iter().find(|factor| factor.code == code)
    }
}
