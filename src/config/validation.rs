//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, ports valid)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: WardenConfig → Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::fmt;

use crate::config::schema::WardenConfig;

/// A single semantic configuration problem.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate the whole configuration, collecting every problem.
pub fn validate_config(config: &WardenConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.cluster.name.is_empty() {
        errors.push(ValidationError {
            field: "cluster.name",
            message: "must not be empty".to_string(),
        });
    }
    if config.cluster.desired_replicas == 0 {
        errors.push(ValidationError {
            field: "cluster.desired_replicas",
            message: "must be at least 1".to_string(),
        });
    }
    if config.cluster.peering_port == 0 {
        errors.push(ValidationError {
            field: "cluster.peering_port",
            message: "must be a valid port".to_string(),
        });
    }
    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError {
            field: "probe.timeout_ms",
            message: "must be greater than zero".to_string(),
        });
    }
    if !config.probe.path.starts_with('/') {
        errors.push(ValidationError {
            field: "probe.path",
            message: "must start with '/'".to_string(),
        });
    }
    if config.probe.max_concurrency == 0 {
        errors.push(ValidationError {
            field: "probe.max_concurrency",
            message: "must be at least 1".to_string(),
        });
    }
    if config.workload.controller_url.is_empty() {
        errors.push(ValidationError {
            field: "workload.controller_url",
            message: "must not be empty".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
