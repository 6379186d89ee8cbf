use super::catalog::{
    PhraseCategory, FEE_REQUEST, MESSENGER_INTERVIEW, PAYMENT_METHODS, SENSITIVE_DATA, TOO_GOOD,
};
use super::domain::{JobInput, RiskCode, RiskFactor, RiskSeverity};
use super::text::{
    contains_shortened_url, count_all_caps_words, domain_matches_company, extract_domain,
    is_free_email_domain, normalize_whitespace,
};
use once_cell::sync::Lazy;
use regex::Regex;

const UNREALISTIC_SALARY_THRESHOLD: f64 = 200_000.0;

static ENTRY_LEVEL_WORDING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)no experience|entry level").expect("entry-level regex is hardcoded and valid")
});

/// Inputs shared by every detector, computed once per evaluation.
pub(crate) struct ScreeningContext<'a> {
    pub job: &'a JobInput,
    pub description: String,
    pub email_domain: Option<String>,
}

impl<'a> ScreeningContext<'a> {
    pub(crate) fn new(job: &'a JobInput) -> Self {
        Self {
            job,
            description: normalize_whitespace(&job.description),
            email_domain: job.contact_email().and_then(extract_domain),
        }
    }
}

type Detector = fn(&ScreeningContext<'_>) -> Option<RiskFactor>;

/// Evaluation order; it fixes the order of the factor list and nothing else.
const DETECTORS: &[Detector] = &[
    free_email,
    domain_mismatch,
    shortened_link,
    shortened_description,
    fee_request,
    payment_methods,
    sensitive_data,
    messenger_interview,
    too_good,
    exclamations,
    all_caps,
    unrealistic_salary,
    corporate_email,
];

pub(crate) fn collect_factors(context: &ScreeningContext<'_>) -> Vec<RiskFactor> {
    DETECTORS
        .iter()
        .filter_map(|detector| detector(context))
        .collect()
}

fn free_email(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let domain = context.email_domain.as_deref()?;
    is_free_email_domain(Some(domain)).then(|| {
        RiskFactor::new(
            RiskCode::FreeEmail,
            "Contact email uses a free provider",
            RiskSeverity::Medium,
            15,
        )
        .with_details(domain)
    })
}

// Independent of `free_email`: a gmail address on a posting with a website trips both.
fn domain_mismatch(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let domain = context.email_domain.as_deref()?;
    let website = context.job.company_website()?;
    (!domain_matches_company(Some(domain), Some(website))).then(|| {
        RiskFactor::new(
            RiskCode::DomainMismatch,
            "Email domain does not match company website",
            RiskSeverity::Medium,
            15,
        )
        .with_details(format!("{domain} vs {website}"))
    })
}

fn shortened_link(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let link = context.job.application_link()?;
    contains_shortened_url(link).then(|| {
        RiskFactor::new(
            RiskCode::ShortenedUrl,
            "Application link uses URL shortener",
            RiskSeverity::Medium,
            10,
        )
        .with_details(link)
    })
}

fn shortened_description(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    contains_shortened_url(&context.description).then(|| {
        RiskFactor::new(
            RiskCode::ShortenedUrlDesc,
            "Shortened URL detected in description",
            RiskSeverity::Low,
            5,
        )
    })
}

fn phrase_category(context: &ScreeningContext<'_>, category: &PhraseCategory) -> Option<RiskFactor> {
    let mentions = category.mentions(&context.description);
    (mentions > 0).then(|| {
        RiskFactor::new(
            category.code,
            category.label,
            category.severity,
            category.weight(mentions),
        )
    })
}

fn fee_request(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    phrase_category(context, &FEE_REQUEST)
}

fn payment_methods(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    phrase_category(context, &PAYMENT_METHODS)
}

fn sensitive_data(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    phrase_category(context, &SENSITIVE_DATA)
}

fn messenger_interview(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    phrase_category(context, &MESSENGER_INTERVIEW)
}

fn too_good(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    phrase_category(context, &TOO_GOOD)
}

fn exclamations(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let count = context.description.matches('!').count();
    (count >= 5).then(|| {
        RiskFactor::new(
            RiskCode::Exclamations,
            "Excessive exclamation marks",
            RiskSeverity::Low,
            capped(count / 2, 10),
        )
    })
}

fn all_caps(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let count = count_all_caps_words(&context.description);
    (count >= 3).then(|| {
        RiskFactor::new(
            RiskCode::AllCaps,
            "Unprofessional ALL-CAPS wording",
            RiskSeverity::Low,
            capped((count / 2).saturating_add(2), 10),
        )
    })
}

fn unrealistic_salary(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let salary_max = context.job.salary_max?;
    let entry_level = ENTRY_LEVEL_WORDING.is_match(&context.description);
    (entry_level && salary_max >= UNREALISTIC_SALARY_THRESHOLD).then(|| {
        RiskFactor::new(
            RiskCode::UnrealisticSalary,
            "Unrealistic salary for entry-level wording",
            RiskSeverity::Medium,
            15,
        )
    })
}

fn corporate_email(context: &ScreeningContext<'_>) -> Option<RiskFactor> {
    let domain = context.email_domain.as_deref()?;
    domain_matches_company(Some(domain), context.job.company_website()).then(|| {
        RiskFactor::new(
            RiskCode::CorpEmail,
            "Corporate email matches company domain",
            RiskSeverity::Low,
            -10,
        )
    })
}

fn capped(value: usize, cap: i32) -> i32 {
    i32::try_from(value).map_or(cap, |value| value.min(cap))
}
