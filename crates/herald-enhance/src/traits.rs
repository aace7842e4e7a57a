//! Enhancement strategy trait

use herald_core::types::{AiEnhancement, TranslateRequest, TranslateResponse};

use crate::error::Result;

/// Trait for enhancement strategies
///
/// Implementations take a request and its deterministic baseline and
/// produce the enriched payload attached to AI-mode responses. The
/// baseline is always computed first and never modified here.
#[async_trait::async_trait]
pub trait EnhancementStrategy: Send + Sync + std::fmt::Debug {
    /// Strategy name, reported as `ai_provider` in responses
    fn name(&self) -> &'static str;

    /// Produce an enhancement for a request and its baseline
    async fn enhance(
        &self,
        request: &TranslateRequest,
        baseline: &TranslateResponse,
    ) -> Result<AiEnhancement>;
}
