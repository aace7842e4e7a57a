//! Remote chat-completion enhancement strategy

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use herald_core::config::EnhancementConfig;
use herald_core::types::{AiEnhancement, TranslateRequest, TranslateResponse};

use crate::error::{EnhanceError, Result};
use crate::traits::EnhancementStrategy;

/// Chat-completion request payload
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

/// Chat-completion response envelope
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Enhancement via a chat-completions endpoint.
///
/// One bounded call per request; no internal retries. The credential is
/// checked before any network activity.
#[derive(Debug)]
pub struct RemoteStrategy {
    config: EnhancementConfig,
    client: reqwest::Client,
}

impl RemoteStrategy {
    /// Create a strategy from enhancement configuration
    pub fn new(config: EnhancementConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }
}

/// Build the user prompt embedding the raw changelog and the baseline
fn build_prompt(request: &TranslateRequest, baseline: &TranslateResponse) -> Result<String> {
    let baseline_json = serde_json::to_string_pretty(baseline)?;
    let tone = request.tone.as_str();
    let persona = request
        .persona
        .map(|p| p.as_str())
        .unwrap_or("general");
    let constraints = request.constraints.as_deref().unwrap_or("none");

    Ok(format!(
        "You are a release communication assistant.
Input changelog:
{raw_text}

Deterministic baseline:
{baseline_json}

Generate JSON ONLY with keys:
- executive_summary: short paragraph for customer-facing teams
- customer_followups: list of follow-up questions
- adoption_risks: list of likely rollout/adoption risks
- impacted_scopes: list of integration scopes mentioned in the changelog
- impacted_partners: list of partner names likely affected
- partner_email_draft: short notification email for impacted partners
Tone: {tone}
Persona: {persona}
Constraints: {constraints}
",
        raw_text = request.raw_text,
    ))
}

/// Parse a chat-completion envelope down to a validated enhancement
fn parse_completion(body: &str) -> Result<AiEnhancement> {
    let envelope: ChatResponse = serde_json::from_str(body)
        .map_err(|e| EnhanceError::InvalidResponse(format!("malformed completion envelope: {e}")))?;

    let content = envelope
        .choices
        .first()
        .map(|choice| choice.message.content.as_str())
        .ok_or_else(|| EnhanceError::InvalidResponse("completion has no choices".to_string()))?;

    parse_enhancement(content)
}

/// Parse and validate the model's JSON payload
fn parse_enhancement(content: &str) -> Result<AiEnhancement> {
    let enhancement: AiEnhancement = serde_json::from_str(content).map_err(|e| {
        EnhanceError::InvalidResponse(format!("content is not enhancement JSON: {e}"))
    })?;

    if enhancement.executive_summary.trim().is_empty() {
        return Err(EnhanceError::InvalidResponse(
            "executive_summary is empty".to_string(),
        ));
    }
    if enhancement.partner_email_draft.trim().is_empty() {
        return Err(EnhanceError::InvalidResponse(
            "partner_email_draft is empty".to_string(),
        ));
    }

    Ok(enhancement)
}

#[async_trait::async_trait]
impl EnhancementStrategy for RemoteStrategy {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn enhance(
        &self,
        request: &TranslateRequest,
        baseline: &TranslateResponse,
    ) -> Result<AiEnhancement> {
        let api_key = self
            .config
            .resolve_api_key()
            .ok_or(EnhanceError::MissingCredential)?;
        let model = self.config.resolve_model();
        let prompt = build_prompt(request, baseline)?;

        info!(model = %model, endpoint = %self.config.endpoint, "requesting remote enhancement");

        let payload = ChatRequest {
            model: &model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "Return strict JSON only.",
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            temperature: 0.0,
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EnhanceError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let enhancement = parse_completion(&body)?;
        debug!(
            followups = enhancement.customer_followups.len(),
            risks = enhancement.adoption_risks.len(),
            "remote enhancement parsed"
        );
        Ok(enhancement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::types::{Audience, Persona, Tone};

    fn request(text: &str) -> TranslateRequest {
        TranslateRequest::new(text, vec![Audience::Cs])
    }

    #[tokio::test]
    async fn missing_credential_fails_before_any_network_call() {
        if std::env::var(EnhancementConfig::API_KEY_ENV).is_ok() {
            return;
        }

        // Port 9 (discard) is never listening; reaching the network at all
        // would surface as an Http error instead of MissingCredential.
        let config = EnhancementConfig {
            endpoint: "http://127.0.0.1:9".to_string(),
            ..EnhancementConfig::default()
        };
        let strategy = RemoteStrategy::new(config).unwrap();

        let err = strategy
            .enhance(&request("Fixed a bug"), &TranslateResponse::default())
            .await
            .unwrap_err();
        assert!(matches!(err, EnhanceError::MissingCredential));
    }

    #[test]
    fn prompt_embeds_request_and_baseline() {
        let req = request("Breaking change: new billing API.")
            .with_tone(Tone::Direct)
            .with_persona(Persona::Tam)
            .with_constraints("no dates");
        let baseline = TranslateResponse {
            risk_flags: vec!["breaking change".to_string()],
            ..TranslateResponse::default()
        };

        let prompt = build_prompt(&req, &baseline).unwrap();

        assert!(prompt.contains("Breaking change: new billing API."));
        assert!(prompt.contains("\"breaking change\""));
        assert!(prompt.contains("Tone: direct"));
        assert!(prompt.contains("Persona: tam"));
        assert!(prompt.contains("Constraints: no dates"));
        assert!(prompt.contains("partner_email_draft"));
    }

    #[test]
    fn prompt_defaults_persona_and_constraints() {
        let prompt = build_prompt(&request("Fixed a bug"), &TranslateResponse::default()).unwrap();
        assert!(prompt.contains("Persona: general"));
        assert!(prompt.contains("Constraints: none"));
        assert!(prompt.contains("Tone: neutral"));
    }

    #[test]
    fn completion_envelope_parses_to_enhancement() {
        let content = serde_json::json!({
            "executive_summary": "Summary for leads.",
            "customer_followups": ["Any blockers?"],
            "adoption_risks": ["Legacy breakage"],
            "impacted_scopes": ["auth:legacy"],
            "impacted_partners": ["Harbor Identity"],
            "partner_email_draft": "Hello partner team, ..."
        })
        .to_string();
        let body = serde_json::json!({
            "choices": [{ "message": { "content": content } }]
        })
        .to_string();

        let enhancement = parse_completion(&body).unwrap();
        assert_eq!(enhancement.executive_summary, "Summary for leads.");
        assert_eq!(enhancement.impacted_partners, vec!["Harbor Identity".to_string()]);
    }

    #[test]
    fn envelope_without_choices_is_invalid() {
        let err = parse_completion(r#"{"choices":[]}"#).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidResponse(_)));
    }

    #[test]
    fn malformed_envelope_is_invalid() {
        let err = parse_completion("not json at all").unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidResponse(_)));
    }

    #[test]
    fn non_json_content_is_invalid() {
        let body = serde_json::json!({
            "choices": [{ "message": { "content": "plain prose, not JSON" } }]
        })
        .to_string();
        let err = parse_completion(&body).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidResponse(_)));
    }

    #[test]
    fn empty_required_fields_are_invalid() {
        let content = serde_json::json!({
            "executive_summary": "  ",
            "partner_email_draft": "draft"
        })
        .to_string();
        let err = parse_enhancement(&content).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidResponse(_)));

        let content = serde_json::json!({
            "executive_summary": "ok",
            "partner_email_draft": ""
        })
        .to_string();
        let err = parse_enhancement(&content).unwrap_err();
        assert!(matches!(err, EnhanceError::InvalidResponse(_)));
    }

    #[test]
    fn list_fields_default_when_model_omits_them() {
        let content = serde_json::json!({
            "executive_summary": "ok",
            "partner_email_draft": "draft"
        })
        .to_string();
        let enhancement = parse_enhancement(&content).unwrap();
        assert!(enhancement.customer_followups.is_empty());
        assert!(enhancement.adoption_risks.is_empty());
    }

    #[test]
    fn name_is_remote() {
        let strategy = RemoteStrategy::new(EnhancementConfig::default()).unwrap();
        assert_eq!(strategy.name(), "remote");
    }
}
