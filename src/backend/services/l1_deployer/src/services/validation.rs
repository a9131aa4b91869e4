use serde::Serialize;

use crate::models::config::{SubnetConfiguration, MIN_RECOMMENDED_GAS_LIMIT};

/// Outcome of a configuration check. Errors block deployment, warnings
/// are advisory and never affect validity.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks every rule independently; findings are collected, never
    /// raised, and no rule short-circuits another.
    pub fn validate(config: &SubnetConfiguration) -> ValidationReport {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // Chain id
        if config.chain_id <= 0 {
            errors.push("Chain ID must be positive".to_string());
        }

        // Gas limit
        if config.gas_limit < MIN_RECOMMENDED_GAS_LIMIT {
            warnings.push("Gas limit is very low".to_string());
        }

        // Validator set
        if config.validators.is_empty() {
            errors.push("At least one validator is required".to_string());
        }

        for (index, validator) in config.validators.iter().enumerate() {
            if validator.node_id.is_empty() {
                errors.push(format!("Validator {} missing node ID", index + 1));
            }
            if validator.weight <= 0 {
                errors.push(format!("Validator {} must have positive weight", index + 1));
            }
        }

        ValidationReport {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}
