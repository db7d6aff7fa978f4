//! Validator configuration.
//!
//! `ValidatorConfig` is fixed for the lifetime of one engine. Changing it
//! means building a new engine; `ConfigPatch` carries the partial update the
//! simplified interface merges in before rebuilding.

use serde::{Deserialize, Serialize};

use crate::error::{LithiumError, LithiumResult};

/// Typed engine configuration with documented defaults.
///
/// Unknown keys are rejected when deserializing, so a misspelt option fails
/// loudly instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Minimum aggregate score for a valid verdict. Default 0.7.
    pub confidence_threshold: f64,
    /// Run the factual-claim detector. Default true.
    pub enable_factual_validation: bool,
    /// Run the logical-consistency detector. Default true.
    pub enable_logical_consistency: bool,
    /// Run the source-attribution detector. Default true.
    pub enable_source_attribution: bool,
    /// Warnings kept before the list is truncated. Default 10.
    pub max_warnings: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.7,
            enable_factual_validation: true,
            enable_logical_consistency: true,
            enable_source_attribution: true,
            max_warnings: 10,
        }
    }
}

impl ValidatorConfig {
    /// Reject values no engine can be built from.
    ///
    /// The threshold must be a finite number in `[0.0, 1.0]`.
    pub fn check(&self) -> LithiumResult<()> {
        let t = self.confidence_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(LithiumError::config(format!(
                "confidence_threshold must be a number between 0.0 and 1.0, got {t}"
            )));
        }
        Ok(())
    }

    /// Return a copy of this configuration with every field set in `patch`
    /// overriding the current value.
    pub fn merged(&self, patch: &ConfigPatch) -> Self {
        Self {
            confidence_threshold: patch
                .confidence_threshold
                .unwrap_or(self.confidence_threshold),
            enable_factual_validation: patch
                .enable_factual_validation
                .unwrap_or(self.enable_factual_validation),
            enable_logical_consistency: patch
                .enable_logical_consistency
                .unwrap_or(self.enable_logical_consistency),
            enable_source_attribution: patch
                .enable_source_attribution
                .unwrap_or(self.enable_source_attribution),
            max_warnings: patch.max_warnings.unwrap_or(self.max_warnings),
        }
    }
}

/// A partial configuration update. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigPatch {
    #[serde(default)]
    pub confidence_threshold: Option<f64>,
    #[serde(default)]
    pub enable_factual_validation: Option<bool>,
    #[serde(default)]
    pub enable_logical_consistency: Option<bool>,
    #[serde(default)]
    pub enable_source_attribution: Option<bool>,
    #[serde(default)]
    pub max_warnings: Option<usize>,
}

impl ConfigPatch {
    /// Build a patch from a loosely-typed JSON object, as received from a
    /// tool host or a configuration file.
    pub fn from_json(value: serde_json::Value) -> LithiumResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| LithiumError::config(format!("invalid configuration options: {e}")))
    }
}
