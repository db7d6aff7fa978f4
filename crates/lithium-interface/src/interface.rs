//! Simplified entry points over the scoring engine.
//!
//! `ValidationInterface` owns one `OutputValidator` plus the configuration
//! and rule catalog it was built from, so `configure` can rebuild the engine
//! with merged options without reloading rules.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lithium_contracts::{
    config::{ConfigPatch, ValidatorConfig},
    error::LithiumResult,
    result::{ConfidenceLevel, ValidationMode, ValidationResult},
};
use lithium_engine::OutputValidator;
use lithium_rules::RuleCatalog;

/// Condensed view of a comprehensive validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub is_valid: bool,
    pub confidence: ConfidenceLevel,
    pub score: f64,
    pub warning_count: usize,
    pub validation_type: ValidationMode,
    pub timestamp: DateTime<Utc>,
}

/// High-level validation API.
pub struct ValidationInterface {
    config: ValidatorConfig,
    catalog: Arc<RuleCatalog>,
    validator: OutputValidator,
}

impl ValidationInterface {
    /// Build an interface over the built-in rule catalog.
    pub fn new(config: ValidatorConfig) -> LithiumResult<Self> {
        Self::with_catalog(config, Arc::new(RuleCatalog::builtin()?))
    }

    /// Build an interface over a caller-supplied catalog.
    pub fn with_catalog(config: ValidatorConfig, catalog: Arc<RuleCatalog>) -> LithiumResult<Self> {
        let validator = OutputValidator::with_catalog(config.clone(), Arc::clone(&catalog))?;
        Ok(Self {
            config,
            catalog,
            validator,
        })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Run a full validation in the requested mode.
    pub fn validate_output(
        &self,
        output: &str,
        context: Option<&str>,
        mode: ValidationMode,
    ) -> ValidationResult {
        self.validator.validate(output, context, mode)
    }

    /// True when `output` passes a quick validation.
    pub fn quick_check(&self, output: &str) -> bool {
        self.validate_output(output, None, ValidationMode::Quick).is_valid
    }

    /// Aggregate score of a quick validation.
    pub fn get_confidence_score(&self, output: &str) -> f64 {
        self.validate_output(output, None, ValidationMode::Quick).score
    }

    pub fn get_validation_summary(&self, output: &str) -> ValidationSummary {
        let result = self.validate_output(output, None, ValidationMode::Comprehensive);
        ValidationSummary {
            is_valid: result.is_valid,
            confidence: result.confidence,
            score: result.score,
            warning_count: result.warnings.len(),
            validation_type: result.validation_type,
            timestamp: result.timestamp,
        }
    }

    /// Validate each output independently, in input order.
    pub fn batch_validate<S: AsRef<str>>(
        &self,
        outputs: &[S],
        mode: ValidationMode,
    ) -> Vec<ValidationResult> {
        debug!(count = outputs.len(), %mode, "batch validation");
        outputs
            .iter()
            .map(|output| self.validate_output(output.as_ref(), None, mode))
            .collect()
    }

    /// Merge `patch` into the current configuration and rebuild the engine.
    ///
    /// On error the interface keeps its previous configuration and engine.
    pub fn configure(&mut self, patch: &ConfigPatch) -> LithiumResult<()> {
        let config = self.config.merged(patch);
        let validator = OutputValidator::with_catalog(config.clone(), Arc::clone(&self.catalog))?;
        info!(
            threshold = config.confidence_threshold,
            max_warnings = config.max_warnings,
            "validator reconfigured"
        );
        self.config = config;
        self.validator = validator;
        Ok(())
    }
}

/// Quick pass/fail check with the default configuration.
pub fn quick_check(output: &str) -> LithiumResult<bool> {
    Ok(ValidationInterface::new(ValidatorConfig::default())?.quick_check(output))
}

/// Quick validation with the default configuration.
pub fn quick_validate(output: &str, context: Option<&str>) -> LithiumResult<ValidationResult> {
    Ok(ValidationInterface::new(ValidatorConfig::default())?.validate_output(
        output,
        context,
        ValidationMode::Quick,
    ))
}

/// Comprehensive validation with the default configuration.
pub fn comprehensive_validate(
    output: &str,
    context: Option<&str>,
) -> LithiumResult<ValidationResult> {
    Ok(ValidationInterface::new(ValidatorConfig::default())?.validate_output(
        output,
        context,
        ValidationMode::Comprehensive,
    ))
}
