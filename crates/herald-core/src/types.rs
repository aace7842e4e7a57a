//! Request and response data model for changelog translation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RequestError;

/// Target audience for a generated summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Audience {
    /// Customer-success and account teams
    Cs,
    /// Support teams preparing for inbound tickets
    Support,
    /// End customers
    Customer,
}

impl Audience {
    /// All audiences, in the order summaries are reported
    pub const ALL: [Audience; 3] = [Audience::Cs, Audience::Support, Audience::Customer];

    /// String form used in CLI flags and serialized requests
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Cs => "cs",
            Audience::Support => "support",
            Audience::Customer => "customer",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Audience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cs" => Ok(Audience::Cs),
            "support" => Ok(Audience::Support),
            "customer" => Ok(Audience::Customer),
            other => Err(format!("unknown audience: {other}")),
        }
    }
}

/// Requested tone for generated summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Factual, no softening
    #[default]
    Neutral,
    /// Warmer phrasing for customer-facing material
    Friendly,
    /// Short and imperative
    Direct,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Friendly => "friendly",
            Tone::Direct => "direct",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "neutral" => Ok(Tone::Neutral),
            "friendly" => Ok(Tone::Friendly),
            "direct" => Ok(Tone::Direct),
            other => Err(format!("unknown tone: {other}")),
        }
    }
}

/// Whether to run the deterministic pipeline alone or layer enhancement on top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Deterministic pipeline only
    #[default]
    Basic,
    /// Deterministic pipeline plus an enhancement strategy
    Ai,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Basic => "basic",
            Mode::Ai => "ai",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Persona hint forwarded to enhancement strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    Cs,
    Support,
    Customer,
    /// Technical account manager
    Tam,
    /// Product manager
    Pm,
    Marketing,
    Legal,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Cs => "cs",
            Persona::Support => "support",
            Persona::Customer => "customer",
            Persona::Tam => "tam",
            Persona::Pm => "pm",
            Persona::Marketing => "marketing",
            Persona::Legal => "legal",
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Persona {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cs" => Ok(Persona::Cs),
            "support" => Ok(Persona::Support),
            "customer" => Ok(Persona::Customer),
            "tam" => Ok(Persona::Tam),
            "pm" => Ok(Persona::Pm),
            "marketing" => Ok(Persona::Marketing),
            "legal" => Ok(Persona::Legal),
            other => Err(format!("unknown persona: {other}")),
        }
    }
}

/// Category assigned to an extracted change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Changed,
    Fixed,
    Deprecated,
    Security,
}

impl ChangeType {
    /// Lowercase label, matching the serialized form
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Changed => "changed",
            ChangeType::Fixed => "fixed",
            ChangeType::Deprecated => "deprecated",
            ChangeType::Security => "security",
        }
    }

    /// Capitalized form used when a summary line leads with the category
    pub fn title(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Changed => "Changed",
            ChangeType::Fixed => "Fixed",
            ChangeType::Deprecated => "Deprecated",
            ChangeType::Security => "Security",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ChangeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "added" => Ok(ChangeType::Added),
            "changed" => Ok(ChangeType::Changed),
            "fixed" => Ok(ChangeType::Fixed),
            "deprecated" => Ok(ChangeType::Deprecated),
            "security" => Ok(ChangeType::Security),
            other => Err(format!("unknown change type: {other}")),
        }
    }
}

/// Overall impact estimate for a release
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Low => "low",
            ImpactLevel::Medium => "medium",
            ImpactLevel::High => "high",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One classified change line from the raw changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedChange {
    /// Change category
    #[serde(rename = "type")]
    pub change_type: ChangeType,
    /// Product area the change touches
    pub area: String,
    /// Normalized description with any leading marker stripped
    pub description: String,
}

impl ExtractedChange {
    pub fn new(
        change_type: ChangeType,
        area: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            change_type,
            area: area.into(),
            description: description.into(),
        }
    }
}

/// A translation request: raw changelog text plus targeting options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    /// Raw changelog or release-note text
    pub raw_text: String,
    /// Audiences to build summaries for
    pub audiences: Vec<Audience>,
    /// Requested tone
    #[serde(default)]
    pub tone: Tone,
    /// Optional product area to scope messaging
    #[serde(default)]
    pub product_area: Option<String>,
    /// Optional free-form constraints from the caller
    #[serde(default)]
    pub constraints: Option<String>,
    /// Basic or AI-enhanced translation
    #[serde(default)]
    pub mode: Mode,
    /// Persona hint for the enhancement layer
    #[serde(default)]
    pub persona: Option<Persona>,
}

impl TranslateRequest {
    /// Create a request with default tone, basic mode, and no extra hints
    pub fn new(raw_text: impl Into<String>, audiences: Vec<Audience>) -> Self {
        Self {
            raw_text: raw_text.into(),
            audiences,
            tone: Tone::default(),
            product_area: None,
            constraints: None,
            mode: Mode::default(),
            persona: None,
        }
    }

    /// Set the requested tone
    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    /// Set the translation mode
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the persona hint
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = Some(persona);
        self
    }

    /// Set the product area hint
    pub fn with_product_area(mut self, area: impl Into<String>) -> Self {
        self.product_area = Some(area.into());
        self
    }

    /// Set free-form constraints
    pub fn with_constraints(mut self, constraints: impl Into<String>) -> Self {
        self.constraints = Some(constraints.into());
        self
    }

    /// Whether the caller asked for a summary targeting `audience`
    pub fn wants_audience(&self, audience: Audience) -> bool {
        self.audiences.contains(&audience)
    }

    /// Boundary validation: non-empty text and at least one audience
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.raw_text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }
        if self.audiences.is_empty() {
            return Err(RequestError::NoAudiences);
        }
        Ok(())
    }
}

/// Structured output of a translation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// Per-change summary lines for customer-success teams
    pub cs_summary: Vec<String>,
    /// Awareness notes for support teams
    pub support_notes: Vec<String>,
    /// Customer-facing summary lines
    pub customer_summary: Vec<String>,
    /// Detected risk labels, first-detection order
    pub risk_flags: Vec<String>,
    /// Follow-up questions triggered by specific risks
    pub follow_up_questions: Vec<String>,
    /// Classified change lines
    pub extracted_changes: Vec<ExtractedChange>,
    /// Overall impact estimate
    pub impact_level: ImpactLevel,
    /// Enhancement payload, present only when an enhancement ran
    #[serde(default)]
    pub ai_enhancement: Option<AiEnhancement>,
    /// Name of the strategy that produced the enhancement
    #[serde(default)]
    pub ai_provider: Option<String>,
    /// True when AI mode was requested but the pipeline fell back to basic output
    #[serde(default)]
    pub ai_fallback_used: bool,
}

/// Enriched payload produced by an enhancement strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiEnhancement {
    /// Short leadership-facing summary
    pub executive_summary: String,
    /// Suggested follow-up questions for customer conversations
    #[serde(default)]
    pub customer_followups: Vec<String>,
    /// Risks that may slow adoption of the release
    #[serde(default)]
    pub adoption_risks: Vec<String>,
    /// Partner integration scopes mentioned in the changelog
    #[serde(default)]
    pub impacted_scopes: Vec<String>,
    /// Partners whose registered scopes overlap the impacted scopes
    #[serde(default)]
    pub impacted_partners: Vec<String>,
    /// Draft notification email for impacted partners
    pub partner_email_draft: String,
}
