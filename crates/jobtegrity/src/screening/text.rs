//! Pure text and domain helpers. Every function is total: malformed or absent
//! input degrades to "no match" instead of an error.

use super::catalog::{FREE_EMAIL_SET, URL_SHORTENERS};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use url::Url;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex is hardcoded and valid"));

static NON_ALPHA_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z]+").expect("separator regex is hardcoded and valid"));

// Applied to lowercased input.
static SCHEME_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9+.\-]*://").expect("scheme regex is hardcoded and valid")
});

/// Domain of an email address or URL, lowercased.
///
/// Anything with a non-empty suffix after its last `@` is treated as an email.
/// Other values are parsed as URLs, with `https://` assumed when the value does not
/// start with a scheme.
pub fn extract_domain(value: &str) -> Option<String> {
    let value = value.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }

    if let Some(at) = value.rfind('@') {
        let domain = &value[at + 1..];
        if !domain.is_empty() {
            return Some(domain.to_string());
        }
    }

    let candidate = if SCHEME_PREFIX.is_match(&value) {
        value
    } else {
        format!("https://{value}")
    };

    Url::parse(&candidate)
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_lowercase)
}

pub fn is_free_email_domain(domain: Option<&str>) -> bool {
    domain
        .map(|domain| FREE_EMAIL_SET.contains(domain.trim().to_lowercase().as_str()))
        .unwrap_or(false)
}

/// True when the email domain equals the website's domain or is a subdomain of it.
pub fn domain_matches_company(email_domain: Option<&str>, company_website: Option<&str>) -> bool {
    let (Some(email_domain), Some(company_website)) = (email_domain, company_website) else {
        return false;
    };
    let Some(company_domain) = extract_domain(company_website) else {
        return false;
    };

    let email_domain = email_domain.trim().to_lowercase();
    email_domain == company_domain || email_domain.ends_with(&format!(".{company_domain}"))
}

pub fn contains_shortened_url(text: &str) -> bool {
    let lower = text.to_lowercase();
    URL_SHORTENERS
        .iter()
        .any(|shortener| lower.contains(shortener))
}

/// Words of four or more ASCII letters written entirely in upper case.
pub fn count_all_caps_words(text: &str) -> usize {
    NON_ALPHA_RUN
        .split(text)
        .filter(|token| token.len() >= 4 && token.chars().all(|c| c.is_ascii_uppercase()))
        .count()
}

/// One case-insensitive literal matcher per phrase.
pub fn phrase_matchers(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| {
            RegexBuilder::new(&regex::escape(pattern))
                .case_insensitive(true)
                .build()
                .ok()
        })
        .collect()
}

/// Non-overlapping matches of every matcher, summed.
pub fn count_matches(text: &str, matchers: &[Regex]) -> usize {
    matchers
        .iter()
        .map(|matcher| matcher.find_iter(text).count())
        .sum()
}

/// Case-insensitive, non-overlapping matches of every phrase, summed.
pub fn count_occurrences(text: &str, patterns: &[&str]) -> usize {
    count_matches(text, &phrase_matchers(patterns))
}

pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
