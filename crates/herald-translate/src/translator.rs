//! Translation orchestration

use tracing::{debug, info, instrument};

use herald_core::types::{Audience, ExtractedChange, TranslateRequest, TranslateResponse};

use crate::classify::{classify_area, classify_change_type, strip_marker};
use crate::risk::{derive_impact, detect_risks, follow_up_questions};
use crate::segment::segment_statements;
use crate::summary::{cs_line, customer_line, support_line};

/// Deterministic changelog-to-audience translator.
///
/// The same request always produces the same response: no timestamps, no
/// randomness, no external calls. Enhancement fields in the response stay
/// unset; the enhancement layer fills them.
pub struct Translator;

impl Translator {
    /// Create a new translator
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over a request
    #[instrument(skip(self, request), fields(mode = %request.mode))]
    pub fn translate(&self, request: &TranslateRequest) -> TranslateResponse {
        info!(
            audiences = request.audiences.len(),
            "translating changelog text"
        );

        let statements = segment_statements(&request.raw_text);
        let mut response = TranslateResponse::default();

        // Blank product-area overrides are ignored
        let area_override = request
            .product_area
            .as_deref()
            .map(str::trim)
            .filter(|area| !area.is_empty());

        for statement in &statements {
            let change_type = classify_change_type(statement);
            let area = match area_override {
                Some(area) => area.to_string(),
                None => classify_area(statement).to_string(),
            };
            let description = strip_marker(statement);
            let change = ExtractedChange::new(change_type, area, description);

            if request.wants_audience(Audience::Cs) {
                response.cs_summary.push(cs_line(&change));
            }
            if request.wants_audience(Audience::Support) {
                response.support_notes.push(support_line(&change));
            }
            if request.wants_audience(Audience::Customer) {
                response.customer_summary.push(customer_line(&change));
            }
            response.extracted_changes.push(change);
        }

        response.risk_flags = detect_risks(&request.raw_text);
        response.follow_up_questions = follow_up_questions(&response.risk_flags);
        response.impact_level = derive_impact(&response.risk_flags);

        debug!(
            statements = statements.len(),
            changes = response.extracted_changes.len(),
            risks = response.risk_flags.len(),
            impact = %response.impact_level,
            "translation complete"
        );

        response
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::types::{ChangeType, ImpactLevel};

    fn all_audiences() -> Vec<Audience> {
        vec![Audience::Cs, Audience::Support, Audience::Customer]
    }

    #[test]
    fn mixed_release_classifies_both_statements() {
        let request = TranslateRequest::new(
            "Added new OAuth login flow. Fixed invoice rounding bug.",
            all_audiences(),
        );
        let response = Translator::new().translate(&request);

        assert_eq!(response.extracted_changes.len(), 2);
        assert_eq!(response.extracted_changes[0].change_type, ChangeType::Added);
        assert_eq!(response.extracted_changes[0].area, "Auth");
        assert_eq!(response.extracted_changes[1].change_type, ChangeType::Fixed);
        assert_eq!(response.extracted_changes[1].area, "Billing");

        assert_eq!(
            response.risk_flags,
            vec![
                "authentication impact".to_string(),
                "billing impact".to_string()
            ]
        );
        assert_eq!(response.impact_level, ImpactLevel::Medium);
        assert!(response
            .customer_summary
            .contains(&"Fix: invoice rounding bug".to_string()));
        assert_eq!(
            response.cs_summary[0],
            "Added — Auth: new OAuth login flow"
        );
    }

    #[test]
    fn every_statement_yields_exactly_one_change() {
        let request = TranslateRequest::new(
            "Fixed one thing\nChanged another thing\nRemoved a third thing",
            all_audiences(),
        );
        let response = Translator::new().translate(&request);

        assert_eq!(response.extracted_changes.len(), 3);
        assert_eq!(response.cs_summary.len(), 3);
        assert_eq!(response.support_notes.len(), 3);
        assert_eq!(response.customer_summary.len(), 3);
    }

    #[test]
    fn summaries_are_gated_on_requested_audiences() {
        let request = TranslateRequest::new("Fixed invoice rounding bug.", vec![Audience::Cs]);
        let response = Translator::new().translate(&request);

        assert_eq!(response.cs_summary.len(), 1);
        assert!(response.support_notes.is_empty());
        assert!(response.customer_summary.is_empty());
        // Risks and changes are always populated
        assert_eq!(response.extracted_changes.len(), 1);
        assert_eq!(response.risk_flags, vec!["billing impact".to_string()]);
    }

    #[test]
    fn breaking_auth_release_is_high_impact() {
        let request = TranslateRequest::new(
            "Added OAuth token rotation. Breaking: old endpoint removed.",
            all_audiences(),
        );
        let response = Translator::new().translate(&request);

        assert!(!response.extracted_changes.is_empty());
        assert!(response.risk_flags.contains(&"breaking change".to_string()));
        assert!(response
            .risk_flags
            .contains(&"authentication impact".to_string()));
        assert_eq!(response.impact_level, ImpactLevel::High);
    }

    #[test]
    fn high_tier_risk_dominates() {
        let request = TranslateRequest::new(
            "Breaking change: dropped v1 token endpoints. Migration required for all tenants.",
            all_audiences(),
        );
        let response = Translator::new().translate(&request);

        assert_eq!(response.impact_level, ImpactLevel::High);
        assert!(response
            .risk_flags
            .contains(&"breaking change".to_string()));
        assert!(response
            .risk_flags
            .contains(&"migration required".to_string()));
        assert!(response
            .follow_up_questions
            .contains(&"Do customers need advance notice?".to_string()));
    }

    #[test]
    fn whitespace_only_input_is_an_empty_low_impact_response() {
        let request = TranslateRequest::new("   \n  ", all_audiences());
        let response = Translator::new().translate(&request);

        assert!(response.extracted_changes.is_empty());
        assert!(response.cs_summary.is_empty());
        assert!(response.risk_flags.is_empty());
        assert!(response.follow_up_questions.is_empty());
        assert_eq!(response.impact_level, ImpactLevel::Low);
    }

    #[test]
    fn translation_is_idempotent() {
        let request = TranslateRequest::new(
            "Breaking change: new billing API. Fixed OAuth token refresh.",
            all_audiences(),
        );
        let translator = Translator::new();

        let first = translator.translate(&request);
        let second = translator.translate(&request);
        assert_eq!(first, second);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn product_area_override_wins() {
        let request = TranslateRequest::new("Fixed invoice rounding bug.", all_audiences())
            .with_product_area("Payments");
        let response = Translator::new().translate(&request);

        assert_eq!(response.extracted_changes[0].area, "Payments");
        assert_eq!(
            response.cs_summary[0],
            "Fixed — Payments: invoice rounding bug"
        );
    }

    #[test]
    fn blank_product_area_override_is_ignored() {
        let request = TranslateRequest::new("Fixed invoice rounding bug.", all_audiences())
            .with_product_area("   ");
        let response = Translator::new().translate(&request);

        assert_eq!(response.extracted_changes[0].area, "Billing");
    }

    #[test]
    fn marker_only_statement_keeps_nonempty_description() {
        let request = TranslateRequest::new("Deprecated.", all_audiences());
        let response = Translator::new().translate(&request);

        assert_eq!(response.extracted_changes.len(), 1);
        assert_eq!(response.extracted_changes[0].description, "Deprecated");
        assert_eq!(
            response.extracted_changes[0].change_type,
            ChangeType::Deprecated
        );
    }

    #[test]
    fn ai_fields_stay_unset() {
        let request = TranslateRequest::new("Fixed a bug.", all_audiences());
        let response = Translator::new().translate(&request);

        assert!(response.ai_enhancement.is_none());
        assert!(response.ai_provider.is_none());
        assert!(!response.ai_fallback_used);
    }

    #[test]
    fn security_lines_never_leak_detail_to_customers() {
        let request = TranslateRequest::new(
            "Security: patched a vulnerability in session handling.",
            all_audiences(),
        );
        let response = Translator::new().translate(&request);

        assert_eq!(
            response.customer_summary,
            vec!["Security improvements applied.".to_string()]
        );
        assert!(response.cs_summary[0].contains("patched a vulnerability"));
    }
}
