//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_enhancement(config)?;
    validate_catalog(config)?;
    validate_output(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_enhancement(config: &Config) -> Result<()> {
    let valid_strategies = ["deterministic", "remote"];
    if !valid_strategies.contains(&config.enhancement.strategy.as_str()) {
        return Err(ConfigError::InvalidValue {
            field: "enhancement.strategy".to_string(),
            message: format!("must be one of: {}", valid_strategies.join(", ")),
        }
        .into());
    }

    if config.enhancement.model.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "enhancement.model".to_string(),
            message: "model cannot be empty".to_string(),
        }
        .into());
    }

    let endpoint = &config.enhancement.endpoint;
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "enhancement.endpoint".to_string(),
            message: "must be an http(s) URL".to_string(),
        }
        .into());
    }

    if config.enhancement.timeout_secs == 0 {
        return Err(ConfigError::InvalidValue {
            field: "enhancement.timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_catalog(config: &Config) -> Result<()> {
    if let Some(file) = &config.catalog.file {
        if file.to_string_lossy().trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "catalog.file".to_string(),
                message: "path cannot be blank".to_string(),
            }
            .into());
        }
    }

    Ok(())
}

fn validate_output(config: &Config) -> Result<()> {
    if config.output.audiences.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "output.audiences".to_string(),
            message: "at least one audience is required".to_string(),
        }
        .into());
    }

    Ok(())
}
