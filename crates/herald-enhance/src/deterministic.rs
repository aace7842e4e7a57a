//! Deterministic enhancement strategy

use std::sync::Arc;

use tracing::debug;

use herald_core::types::{AiEnhancement, TranslateRequest, TranslateResponse};
use herald_partners::{extract_scopes, PartnerCatalog};

use crate::error::Result;
use crate::traits::EnhancementStrategy;

/// Keywords that mark a changelog as touching authentication
const AUTH_CONTEXT_KEYWORDS: &[&str] = &["oauth", "token", "sso", "auth"];

/// Cap on partner names interpolated into summaries and emails
const PARTNER_MENTION_LIMIT: usize = 8;

/// Offline enhancement built from the baseline, scope extraction, and the
/// partner catalog. Never performs I/O; the same input yields the same
/// output.
#[derive(Debug)]
pub struct DeterministicStrategy {
    catalog: Arc<PartnerCatalog>,
}

impl DeterministicStrategy {
    /// Create a strategy over the given partner catalog
    pub fn new(catalog: Arc<PartnerCatalog>) -> Self {
        Self { catalog }
    }

    fn has_auth_context(raw_text: &str) -> bool {
        let lowered = raw_text.to_lowercase();
        AUTH_CONTEXT_KEYWORDS.iter().any(|kw| lowered.contains(kw))
    }

    /// Scope-aware enhancement for authentication-related releases
    fn auth_enhancement(&self, request: &TranslateRequest) -> AiEnhancement {
        let scopes = extract_scopes(&request.raw_text);
        let partners = self.catalog.impacted_partners_for_scopes(&scopes);

        let scope_phrase = if scopes.is_empty() {
            "authentication flows".to_string()
        } else {
            scopes.join(", ")
        };
        let partner_phrase = partners
            .iter()
            .take(PARTNER_MENTION_LIMIT)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ");

        let executive_summary = if partners.is_empty() {
            format!(
                "This release changes authentication behavior around {scope_phrase}. \
                 No registered partner integrations consume these scopes, but support \
                 teams should still expect questions from custom integrations."
            )
        } else {
            format!(
                "This release changes authentication behavior around {scope_phrase}. \
                 Registered partner integrations relying on these scopes include \
                 {partner_phrase}; coordinate outreach before rollout."
            )
        };

        let mut customer_followups =
            vec!["Have all affected integrations validated the new auth scopes?".to_string()];
        if !partners.is_empty() {
            customer_followups.push(format!(
                "Has partner outreach been scheduled for {partner_phrase}?"
            ));
        }

        let adoption_risks = vec![
            "Partners pinned to legacy auth scopes may break.".to_string(),
            "Token refresh flows may need re-validation.".to_string(),
            "Support volume may spike during the migration window.".to_string(),
        ];

        let partner_email_draft = build_partner_email(&scope_phrase, &partner_phrase);

        AiEnhancement {
            executive_summary,
            customer_followups,
            adoption_risks,
            impacted_scopes: scopes,
            impacted_partners: partners,
            partner_email_draft,
        }
    }

    /// Generic enhancement when no auth context is detected
    fn generic_enhancement(baseline: &TranslateResponse) -> AiEnhancement {
        AiEnhancement {
            executive_summary: format!(
                "This release introduces operationally meaningful updates with {} estimated \
                 impact. Teams should align customer messaging to risk flags and support \
                 preparation notes.",
                baseline.impact_level
            ),
            customer_followups: baseline
                .follow_up_questions
                .iter()
                .take(3)
                .cloned()
                .collect(),
            adoption_risks: baseline.risk_flags.iter().take(3).cloned().collect(),
            impacted_scopes: Vec::new(),
            impacted_partners: Vec::new(),
            partner_email_draft: format!(
                "Subject: Release notice\n\nHello partner team,\n\nA new release is rolling \
                 out with {} estimated impact. No partner-facing integration changes were \
                 identified; release notes are available on request.\n\nThank you,\nPartner \
                 Engineering",
                baseline.impact_level
            ),
        }
    }
}

fn build_partner_email(scope_phrase: &str, partner_phrase: &str) -> String {
    let greeting = if partner_phrase.is_empty() {
        "Hello partner team,".to_string()
    } else {
        format!("Hello {partner_phrase},")
    };

    format!(
        "Subject: Upcoming authentication changes\n\n{greeting}\n\nWe are updating the \
         authentication scopes your integration may rely on: {scope_phrase}. Please review \
         your configuration ahead of rollout and let us know if you need help \
         migrating.\n\nThank you,\nPartner Engineering"
    )
}

#[async_trait::async_trait]
impl EnhancementStrategy for DeterministicStrategy {
    fn name(&self) -> &'static str {
        "deterministic"
    }

    async fn enhance(
        &self,
        request: &TranslateRequest,
        baseline: &TranslateResponse,
    ) -> Result<AiEnhancement> {
        let enhancement = if Self::has_auth_context(&request.raw_text) {
            debug!("auth context detected, building scope-aware enhancement");
            self.auth_enhancement(request)
        } else {
            debug!("no auth context, building generic enhancement");
            Self::generic_enhancement(baseline)
        };
        Ok(enhancement)
    }
}
