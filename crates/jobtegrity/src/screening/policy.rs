use super::catalog::SUGGESTIONS;
use super::domain::{RiskFactor, RiskLevel};

const BASE_SCORE: i64 = 100;

/// Start at 100, subtract every weight, clamp to `0..=100`.
pub(crate) fn aggregate_score(factors: &[RiskFactor]) -> u8 {
    let raw = factors
        .iter()
        .fold(BASE_SCORE, |score, factor| score - i64::from(factor.weight));
    u8::try_from(raw.clamp(0, BASE_SCORE)).unwrap_or(0)
}

pub(crate) fn suggestions_for(factors: &[RiskFactor]) -> Vec<String> {
    SUGGESTIONS
        .iter()
        .filter(|(codes, _)| factors.iter().any(|factor| codes.contains(&factor.code)))
        .map(|(_, advice)| (*advice).to_string())
        .collect()
}

pub(crate) fn summarize(level: RiskLevel, score: u8, factor_count: usize) -> String {
    let plural = if factor_count == 1 { "" } else { "s" };
    format!(
        "{} ({}/100). {} risk factor{} detected.",
        level.label(),
        score,
        factor_count,
        plural
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::domain::{RiskCode, RiskSeverity};

    fn factor(code: RiskCode, weight: i32) -> RiskFactor {
        RiskFactor::new(code, "test", RiskSeverity::Low, weight)
    }

    #[test]
    fn score_is_clamped_at_both_ends() {
        assert_eq!(aggregate_score(&[]), 100);
        assert_eq!(aggregate_score(&[factor(RiskCode::CorpEmail, -10)]), 100);
        let heavy = vec![
            factor(RiskCode::FeeRequest, 40),
            factor(RiskCode::PaymentMethods, 40),
            factor(RiskCode::SensitiveData, 40),
        ];
        assert_eq!(aggregate_score(&heavy), 0);
    }

    #[test]
    fn negative_weights_offset_penalties() {
        let factors = vec![
            factor(RiskCode::ShortenedUrl, 10),
            factor(RiskCode::CorpEmail, -10),
        ];
        assert_eq!(aggregate_score(&factors), 100);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(RiskLevel::from_score(0), RiskLevel::HighRisk);
        assert_eq!(RiskLevel::from_score(49), RiskLevel::HighRisk);
        assert_eq!(RiskLevel::from_score(50), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_score(74), RiskLevel::Caution);
        assert_eq!(RiskLevel::from_score(75), RiskLevel::Legit);
        assert_eq!(RiskLevel::from_score(100), RiskLevel::Legit);
    }

    #[test]
    fn suggestions_follow_priority_not_factor_order() {
        let factors = vec![
            factor(RiskCode::SensitiveData, 25),
            factor(RiskCode::DomainMismatch, 15),
            factor(RiskCode::FreeEmail, 15),
            factor(RiskCode::FeeRequest, 25),
        ];

        let suggestions = suggestions_for(&factors);

        assert_eq!(
            suggestions,
            vec![
                "Verify sender identity via official company site before responding.".to_string(),
                "Legitimate employers do not charge fees for equipment or applications."
                    .to_string(),
                "Never share SSN or banking details before a signed offer and onboarding."
                    .to_string(),
            ]
        );
    }

    #[test]
    fn style_factors_carry_no_advice() {
        let factors = vec![
            factor(RiskCode::Exclamations, 3),
            factor(RiskCode::AllCaps, 4),
        ];
        assert!(suggestions_for(&factors).is_empty());
    }

    #[test]
    fn summary_pluralizes_factor_count() {
        assert_eq!(
            summarize(RiskLevel::Legit, 100, 0),
            "Legit (100/100). 0 risk factors detected."
        );
        assert_eq!(
            summarize(RiskLevel::Caution, 60, 1),
            "Caution (60/100). 1 risk factor detected."
        );
        assert_eq!(
            summarize(RiskLevel::HighRisk, 15, 3),
            "High Risk (15/100). 3 risk factors detected."
        );
    }
}
