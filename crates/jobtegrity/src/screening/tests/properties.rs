use super::common::*;
use crate::screening::domain::{JobInput, RiskCode, RiskLevel};
use crate::screening::screen_job;

fn corpus() -> Vec<JobInput> {
    let mut jobs = vec![
        JobInput::default(),
        corporate_job(),
        scam_job(),
        job(""),
        job("   \n\t  "),
        job("Pay the processing fee via Western Union or MoneyGram, then wire transfer the rest."),
        job(&"crypto bitcoin ethereum ".repeat(20)),
        job("WORK FROM HOME IMMEDIATELY!!!!!!!!!! SET YOUR OWN HOURS AND SALARY"),
    ];

    let mut odd_contacts = job("Contact us.");
    odd_contacts.contact_email = Some("@@@".to_string());
    odd_contacts.company_website = Some("::::".to_string());
    odd_contacts.application_link = Some(String::new());
    jobs.push(odd_contacts);

    let mut negative_salary = job("Entry level, no experience.");
    negative_salary.salary_min = Some(-5.0);
    negative_salary.salary_max = Some(f64::NAN);
    jobs.push(negative_salary);

    let mut unicode = job("Ünïcödé ÄÖÜ ÉÈÊ - offre d'emploi, 日本語の求人");
    unicode.contact_email = Some("rh@société.fr".to_string());
    unicode.company_website = Some("https://société.fr".to_string());
    jobs.push(unicode);

    jobs
}

#[test]
fn score_and_tier_are_always_consistent() {
    for posting in corpus() {
        let result = screen_job(&posting);
        assert!(result.score <= 100);
        assert_eq!(result.risk_level, RiskLevel::from_score(result.score));
        assert!(result.summary.starts_with(result.risk_level.label()));
    }
}

#[test]
fn screening_is_idempotent() {
    for posting in corpus() {
        assert_eq!(screen_job(&posting), screen_job(&posting));
    }
}

#[test]
fn factor_codes_never_repeat() {
    for posting in corpus() {
        let result = screen_job(&posting);
        assert_eq!(unique_codes(&result).len(), result.factors.len());
    }
}

#[test]
fn no_factors_means_perfect_score_and_no_advice() {
    for posting in corpus() {
        let result = screen_job(&posting);
        if result.factors.is_empty() {
            assert_eq!(result.score, 100);
            assert_eq!(result.risk_level, RiskLevel::Legit);
            assert!(result.suggestions.is_empty());
        }
    }
}

#[test]
fn more_fee_mentions_never_lower_the_penalty() {
    let mut previous = 0;
    for mentions in 1..=12 {
        let result = screen_job(&job(&"There is a training fee. ".repeat(mentions)));
        let weight = weight_of(&result, RiskCode::FeeRequest).expect("fee factor present");
        assert!(weight >= previous, "weight dropped at {mentions} mentions");
        if mentions >= 4 {
            assert_eq!(weight, 40);
        }
        previous = weight;
    }
}

#[test]
fn more_messenger_mentions_never_lower_the_penalty() {
    let mut previous = 0;
    for mentions in 1..=10 {
        let result = screen_job(&job(&"Chat on whatsapp. ".repeat(mentions)));
        let weight =
            weight_of(&result, RiskCode::MessengerInterview).expect("messenger factor present");
        assert!(weight >= previous);
        assert!(weight <= 35);
        previous = weight;
    }
    assert_eq!(previous, 35);
}

#[test]
fn suggestions_are_never_duplicated() {
    for posting in corpus() {
        let result = screen_job(&posting);
        let mut seen = result.suggestions.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.suggestions.len());
    }
}
