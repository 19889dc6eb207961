//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (seeded flips reference seeded count labels)
//! - Validate value ranges (timeout > 0, addresses parse, ids positive)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function over the config
//! - Runs before the config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;

/// A single semantic violation in the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid bind address: {0:?}")]
    InvalidBindAddress(String),

    #[error("invalid metrics address: {0:?}")]
    InvalidMetricsAddress(String),

    #[error("request timeout must be greater than zero")]
    ZeroRequestTimeout,

    #[error("seeded count labels must not be empty")]
    EmptyCountLabel,

    #[error("seeded flip ids must be positive")]
    ZeroFlipId,

    #[error("duplicate seeded flip id: {0}")]
    DuplicateFlipId(u64),

    #[error("seeded flip {id} has an empty result")]
    EmptyFlipResult { id: u64 },

    #[error("seeded flip {id} has result {result:?} with no matching count label")]
    UnseededFlipResult { id: u64, result: String },
}

/// Check everything serde cannot, collecting every violation.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.seed.counts.keys().any(|label| label.is_empty()) {
        errors.push(ValidationError::EmptyCountLabel);
    }

    let mut seen_ids = HashSet::new();
    for flip in &config.seed.flips {
        if flip.id == 0 {
            errors.push(ValidationError::ZeroFlipId);
        }
        if !seen_ids.insert(flip.id) {
            errors.push(ValidationError::DuplicateFlipId(flip.id));
        }
        if flip.result.is_empty() {
            errors.push(ValidationError::EmptyFlipResult { id: flip.id });
        } else if !config.seed.counts.contains_key(&flip.result) {
            errors.push(ValidationError::UnseededFlipResult {
                id: flip.id,
                result: flip.result.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::FlipSeed;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ServerConfig::default()).is_ok());
    }

    #[test]
    fn test_bad_bind_address() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "not-an-address".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidBindAddress(
            "not-an-address".to_string()
        )));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServerConfig::default();
        config.observability.metrics_address = "bogus".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = ServerConfig::default();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::ZeroRequestTimeout]);
    }

    #[test]
    fn test_seed_flip_checks() {
        let mut config = ServerConfig::default();
        config.seed.flips = vec![
            FlipSeed {
                id: 0,
                result: "heads".to_string(),
            },
            FlipSeed {
                id: 2,
                result: String::new(),
            },
            FlipSeed {
                id: 2,
                result: "sideways".to_string(),
            },
        ];

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::ZeroFlipId));
        assert!(errors.contains(&ValidationError::EmptyFlipResult { id: 2 }));
        assert!(errors.contains(&ValidationError::DuplicateFlipId(2)));
        assert!(errors.contains(&ValidationError::UnseededFlipResult {
            id: 2,
            result: "sideways".to_string(),
        }));
    }

    #[test]
    fn test_all_errors_reported_together() {
        let mut config = ServerConfig::default();
        config.listener.bind_address = "nope".to_string();
        config.timeouts.request_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
