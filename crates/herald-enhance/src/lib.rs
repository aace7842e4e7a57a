//! Herald Enhance - enhancement strategies for translated changelogs
//!
//! Strategies take a translation request plus its deterministic baseline
//! and produce the enriched `AiEnhancement` payload: an offline
//! deterministic strategy (the default) and a remote chat-completion
//! strategy. Fallback between them is the caller's decision.

mod deterministic;
mod error;
mod registry;
mod remote;
mod traits;

pub use deterministic::DeterministicStrategy;
pub use error::{EnhanceError, Result};
pub use registry::strategy_from_config;
pub use remote::RemoteStrategy;
pub use traits::EnhancementStrategy;
