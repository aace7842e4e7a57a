//! Strategy selection

use std::sync::Arc;

use tracing::debug;

use herald_core::config::EnhancementConfig;
use herald_partners::PartnerCatalog;

use crate::deterministic::DeterministicStrategy;
use crate::error::{EnhanceError, Result};
use crate::remote::RemoteStrategy;
use crate::traits::EnhancementStrategy;

/// Build the enhancement strategy named by the configuration.
///
/// Unknown names are rejected rather than silently falling back to the
/// default.
pub fn strategy_from_config(
    config: &EnhancementConfig,
    catalog: Arc<PartnerCatalog>,
) -> Result<Box<dyn EnhancementStrategy>> {
    debug!(strategy = %config.strategy, "selecting enhancement strategy");
    match config.strategy.as_str() {
        "deterministic" => Ok(Box::new(DeterministicStrategy::new(catalog))),
        "remote" => Ok(Box::new(RemoteStrategy::new(config.clone())?)),
        other => Err(EnhanceError::UnknownStrategy(other.to_string())),
    }
}
