//! Structured logging.
//!
//! # Responsibilities
//! - Provide the default log filter for the binary
//! - Document the logging conventions
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Subscriber initialization happens once, in main
//! - `RUST_LOG` overrides the configured level

/// Default env-filter directive when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str) -> String {
    format!("quorum_warden={}", log_level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_to_crate() {
        assert_eq!(default_directive("debug"), "quorum_warden=debug");
    }
}
