//! Fixed lookup tables behind the screening rules.
//!
//! Phrases are literal, lowercase fragments. They match anywhere in the text,
//! so `signal` also counts inside `signaling`.

use super::domain::{RiskCode, RiskSeverity};
use super::text::{count_matches, count_occurrences, phrase_matchers};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const FREE_EMAIL_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "yahoo.co.uk",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "aol.com",
    "proton.me",
    "protonmail.com",
    "icloud.com",
    "mail.com",
    "yandex.com",
];

pub(crate) static FREE_EMAIL_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| FREE_EMAIL_DOMAINS.iter().copied().collect());

pub const URL_SHORTENERS: &[&str] = &[
    "bit.ly",
    "tinyurl.com",
    "t.co",
    "is.gd",
    "rebrand.ly",
    "cutt.ly",
    "ow.ly",
    "buff.ly",
];

pub const FEE_PHRASES: &[&str] = &[
    "training fee",
    "application fee",
    "processing fee",
    "equipment fee",
    "shipping fee",
    "upfront fee",
    "pay a fee",
    "fee required",
    "deposit required",
];

pub const PAYMENT_PHRASES: &[&str] = &[
    "gift card",
    "giftcard",
    "apple pay",
    "google pay",
    "wire transfer",
    "western union",
    "moneygram",
    "crypto",
    "bitcoin",
    "ethereum",
    "cashier's check",
    "cashiers check",
    "check by mail",
];

pub const SENSITIVE_DATA_PHRASES: &[&str] = &[
    "social security",
    "ssn",
    "bank account",
    "routing number",
    "credit card",
    "passport number",
    "driver's license",
    "drivers license",
];

pub const MESSENGER_PHRASES: &[&str] = &[
    "telegram",
    "whatsapp",
    "signal",
    "facebook messenger",
    "imessage",
];

pub const TOO_GOOD_PHRASES: &[&str] = &[
    "no experience required",
    "work from home immediately",
    "earn $$$",
    "quick money",
    "instant pay",
    "weekly pay guaranteed",
    "set your own hours and salary",
];

/// Phrase family scored as `min(cap, base + step * mentions)`.
#[derive(Debug, Clone, Copy)]
pub struct PhraseCategory {
    pub code: RiskCode,
    pub label: &'static str,
    pub severity: RiskSeverity,
    pub phrases: &'static [&'static str],
    pub base: u32,
    pub step: u32,
    pub cap: u32,
}

impl PhraseCategory {
    /// Total phrase mentions in `text`, using the matchers compiled for this category.
    pub fn mentions(&self, text: &str) -> usize {
        match CATEGORY_MATCHERS.iter().find(|(code, _)| *code == self.code) {
            Some((_, matchers)) => count_matches(text, matchers),
            None => count_occurrences(text, self.phrases),
        }
    }

    pub fn weight(&self, mentions: usize) -> i32 {
        let mentions = u32::try_from(mentions).unwrap_or(u32::MAX);
        let weight = self
            .base
            .saturating_add(self.step.saturating_mul(mentions))
            .min(self.cap);
        i32::try_from(weight).unwrap_or(i32::MAX)
    }
}

/// Phrase categories in detector order.
pub const PHRASE_CATEGORIES: [PhraseCategory; 5] = [
    FEE_REQUEST,
    PAYMENT_METHODS,
    SENSITIVE_DATA,
    MESSENGER_INTERVIEW,
    TOO_GOOD,
];

static CATEGORY_MATCHERS: Lazy<Vec<(RiskCode, Vec<Regex>)>> = Lazy::new(|| {
    PHRASE_CATEGORIES
        .iter()
        .map(|category| (category.code, phrase_matchers(category.phrases)))
        .collect()
});

pub const FEE_REQUEST: PhraseCategory = PhraseCategory {
    code: RiskCode::FeeRequest,
    label: "Mentions fees to apply or get equipment",
    severity: RiskSeverity::High,
    phrases: FEE_PHRASES,
    base: 20,
    step: 5,
    cap: 40,
};

pub const PAYMENT_METHODS: PhraseCategory = PhraseCategory {
    code: RiskCode::PaymentMethods,
    label: "Suspicious payment methods mentioned",
    severity: RiskSeverity::High,
    phrases: PAYMENT_PHRASES,
    base: 20,
    step: 5,
    cap: 40,
};

pub const SENSITIVE_DATA: PhraseCategory = PhraseCategory {
    code: RiskCode::SensitiveData,
    label: "Requests sensitive personal or financial data",
    severity: RiskSeverity::High,
    phrases: SENSITIVE_DATA_PHRASES,
    base: 20,
    step: 5,
    cap: 40,
};

pub const MESSENGER_INTERVIEW: PhraseCategory = PhraseCategory {
    code: RiskCode::MessengerInterview,
    label: "Interview via Telegram/WhatsApp/Signal",
    severity: RiskSeverity::High,
    phrases: MESSENGER_PHRASES,
    base: 15,
    step: 5,
    cap: 35,
};

pub const TOO_GOOD: PhraseCategory = PhraseCategory {
    code: RiskCode::TooGood,
    label: "Too-good-to-be-true claims",
    severity: RiskSeverity::Medium,
    phrases: TOO_GOOD_PHRASES,
    base: 5,
    step: 3,
    cap: 15,
};

/// Suggestions in the order they are shown, each keyed by the codes that trigger it.
pub const SUGGESTIONS: &[(&[RiskCode], &str)] = &[
    (
        &[RiskCode::FreeEmail, RiskCode::DomainMismatch],
        "Verify sender identity via official company site before responding.",
    ),
    (
        &[RiskCode::FeeRequest],
        "Legitimate employers do not charge fees for equipment or applications.",
    ),
    (
        &[RiskCode::PaymentMethods],
        "Avoid gift cards, crypto, or wire transfers for employment processes.",
    ),
    (
        &[RiskCode::MessengerInterview],
        "Be cautious with interviews conducted solely on messaging apps.",
    ),
    (
        &[RiskCode::SensitiveData],
        "Never share SSN or banking details before a signed offer and onboarding.",
    ),
];
