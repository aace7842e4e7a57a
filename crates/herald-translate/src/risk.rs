//! Risk detection, follow-up derivation, and impact estimation

use herald_core::types::ImpactLevel;

use crate::segment::normalize;

/// Ordered risk table scanned over the whole changelog text
const RISK_KEYWORDS: &[(&str, &[&str])] = &[
    ("breaking change", &["breaking", "incompatible"]),
    ("authentication impact", &["auth", "oauth", "token", "permission"]),
    ("billing impact", &["billing", "invoice", "subscription", "payment"]),
    ("downtime risk", &["downtime", "outage"]),
    ("migration required", &["migration", "migrate"]),
    ("rate limit impact", &["rate limit", "throttle"]),
];

/// Follow-up questions raised by specific risks, in reporting order
const FOLLOW_UPS: &[(&str, &str)] = &[
    ("breaking change", "Do customers need advance notice?"),
    (
        "authentication impact",
        "Are any customers using custom auth configurations?",
    ),
    (
        "billing impact",
        "Does finance need to validate billing behavior?",
    ),
];

/// Risks that force a high impact estimate
const HIGH_IMPACT_RISKS: &[&str] = &["breaking change", "downtime risk", "migration required"];

/// Risks that raise the estimate to medium
const MEDIUM_IMPACT_RISKS: &[&str] = &[
    "authentication impact",
    "billing impact",
    "rate limit impact",
];

/// Scan the raw text for risk signals.
///
/// Labels come back in table order, each at most once, regardless of where
/// their keywords appear in the text.
pub fn detect_risks(raw_text: &str) -> Vec<String> {
    let haystack = normalize(raw_text).to_lowercase();
    let mut flags = Vec::new();

    for (label, keywords) in RISK_KEYWORDS {
        if keywords.iter().any(|kw| haystack.contains(kw)) {
            flags.push((*label).to_string());
        }
    }

    flags
}

/// Derive follow-up questions from detected risk flags
pub fn follow_up_questions(risk_flags: &[String]) -> Vec<String> {
    FOLLOW_UPS
        .iter()
        .filter(|(label, _)| risk_flags.iter().any(|flag| flag == label))
        .map(|(_, question)| (*question).to_string())
        .collect()
}

/// Derive the overall impact level from detected risk flags.
///
/// Any high-tier risk dominates; otherwise any medium-tier risk raises the
/// level to medium; no risks means low.
pub fn derive_impact(risk_flags: &[String]) -> ImpactLevel {
    if risk_flags
        .iter()
        .any(|flag| HIGH_IMPACT_RISKS.contains(&flag.as_str()))
    {
        ImpactLevel::High
    } else if risk_flags
        .iter()
        .any(|flag| MEDIUM_IMPACT_RISKS.contains(&flag.as_str()))
    {
        ImpactLevel::Medium
    } else {
        ImpactLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_risks_in_table_order() {
        // Billing keywords appear first in the text; the table still orders them last
        let flags = detect_risks("Invoice handling changed and the API is breaking");
        assert_eq!(
            flags,
            vec!["breaking change".to_string(), "billing impact".to_string()]
        );
    }

    #[test]
    fn each_risk_reported_once() {
        let flags = detect_risks("breaking breaking incompatible breaking");
        assert_eq!(flags, vec!["breaking change".to_string()]);
    }

    #[test]
    fn multiword_keywords_match_across_whitespace() {
        let flags = detect_risks("New rate\nlimit tiers rolling out");
        assert_eq!(flags, vec!["rate limit impact".to_string()]);
    }

    #[test]
    fn no_signals_no_flags() {
        assert!(detect_risks("Polished the docs").is_empty());
    }

    #[test]
    fn follow_ups_match_their_risks() {
        let flags = vec![
            "breaking change".to_string(),
            "billing impact".to_string(),
        ];
        let questions = follow_up_questions(&flags);
        assert_eq!(
            questions,
            vec![
                "Do customers need advance notice?".to_string(),
                "Does finance need to validate billing behavior?".to_string(),
            ]
        );
    }

    #[test]
    fn downtime_risk_has_no_follow_up() {
        let questions = follow_up_questions(&["downtime risk".to_string()]);
        assert!(questions.is_empty());
    }

    #[test]
    fn high_tier_dominates_medium() {
        let flags = vec![
            "authentication impact".to_string(),
            "migration required".to_string(),
        ];
        assert_eq!(derive_impact(&flags), ImpactLevel::High);
    }

    #[test]
    fn medium_tier_without_high() {
        let flags = vec!["rate limit impact".to_string()];
        assert_eq!(derive_impact(&flags), ImpactLevel::Medium);
    }

    #[test]
    fn empty_flags_are_low() {
        assert_eq!(derive_impact(&[]), ImpactLevel::Low);
    }
}
