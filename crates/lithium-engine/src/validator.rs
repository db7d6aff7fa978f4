//! The output validator: runs the enabled detectors and aggregates them.
//!
//! Aggregation for one `validate` call:
//!
//! 1. Run every enabled detector in category order (factual, logical,
//!    source). The requested mode does not change this set.
//! 2. Add each sub-score times its fixed weight to the total and record the
//!    unweighted sub-score under the category's `details` key.
//! 3. Concatenate warnings in detector order.
//! 4. Derive the confidence tier from the total and the verdict from the
//!    configured threshold. The total is not renormalized when detectors are
//!    disabled.
//! 5. Truncate warnings to `max_warnings`, appending a summary entry.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use lithium_contracts::{
    config::ValidatorConfig,
    error::LithiumResult,
    result::{CategoryDetail, ConfidenceLevel, SignalCategory, ValidationMode, ValidationResult},
};
use lithium_rules::RuleCatalog;

use crate::detectors::{FactualClaimDetector, LogicalConsistencyDetector, SourceAttributionDetector};
use crate::traits::SignalDetector;

/// The scoring engine.
///
/// Configuration and detectors are fixed at construction. `validate` only
/// reads them, so one validator can be shared across threads.
pub struct OutputValidator {
    config: ValidatorConfig,
    detectors: Vec<Box<dyn SignalDetector>>,
}

impl OutputValidator {
    /// Build a validator over the built-in rule catalog.
    pub fn new(config: ValidatorConfig) -> LithiumResult<Self> {
        Self::with_catalog(config, Arc::new(RuleCatalog::builtin()?))
    }

    /// Build a validator over `catalog`, enabling detectors per `config`.
    pub fn with_catalog(config: ValidatorConfig, catalog: Arc<RuleCatalog>) -> LithiumResult<Self> {
        let mut detectors: Vec<Box<dyn SignalDetector>> = Vec::new();
        if config.enable_factual_validation {
            detectors.push(Box::new(FactualClaimDetector::new(Arc::clone(&catalog))));
        }
        if config.enable_logical_consistency {
            detectors.push(Box::new(LogicalConsistencyDetector::new(Arc::clone(&catalog))));
        }
        if config.enable_source_attribution {
            detectors.push(Box::new(SourceAttributionDetector::new(catalog)));
        }
        Self::from_detectors(config, detectors)
    }

    /// Build a validator from an explicit detector list, run in list order.
    pub fn from_detectors(
        config: ValidatorConfig,
        detectors: Vec<Box<dyn SignalDetector>>,
    ) -> LithiumResult<Self> {
        config.check()?;
        debug!(
            detectors = detectors.len(),
            threshold = config.confidence_threshold,
            max_warnings = config.max_warnings,
            "output validator built"
        );
        Ok(Self { config, detectors })
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Score `text` and build a fresh result.
    ///
    /// `context` is accepted for callers that have it but does not affect
    /// scoring. `mode` is echoed into the result.
    pub fn validate(&self, text: &str, context: Option<&str>, mode: ValidationMode) -> ValidationResult {
        let mut score = 0.0;
        let mut details = BTreeMap::new();
        let mut warnings = Vec::new();

        for detector in &self.detectors {
            let category = detector.category();
            let report = detector.detect(text);
            score += report.score * category.weight();
            details.insert(
                category,
                CategoryDetail {
                    score: report.score,
                    warning_count: report.warnings.len(),
                },
            );
            warnings.extend(report.warnings);
        }

        let confidence = ConfidenceLevel::from_score(score);
        let is_valid = score >= self.config.confidence_threshold;
        let raw_warnings = warnings.len();
        truncate_warnings(&mut warnings, self.config.max_warnings);

        debug!(
            %mode,
            has_context = context.is_some(),
            score,
            %confidence,
            is_valid,
            warnings = raw_warnings,
            "validation complete"
        );

        ValidationResult {
            is_valid,
            confidence,
            score,
            details,
            warnings,
            timestamp: Utc::now(),
            validation_type: mode,
        }
    }

    /// Categories this validator runs, in invocation order.
    pub fn enabled_categories(&self) -> Vec<SignalCategory> {
        self.detectors.iter().map(|d| d.category()).collect()
    }
}

/// Cut `warnings` to `max` entries and append a summary line when it was longer.
///
/// The omitted count is taken from the list after truncation, so the
/// summary always reports zero.
fn truncate_warnings(warnings: &mut Vec<String>, max: usize) {
    if warnings.len() > max {
        warnings.truncate(max);
        let omitted = warnings.len() - max;
        warnings.push(format!("... and {omitted} more warnings"));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use lithium_contracts::{
        config::ValidatorConfig,
        error::LithiumError,
        result::{ConfidenceLevel, SignalCategory, ValidationMode},
    };

    use super::OutputValidator;
    use crate::traits::{SignalDetector, SignalReport};

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn validator() -> OutputValidator {
        OutputValidator::new(ValidatorConfig::default()).unwrap()
    }

    /// A detector that returns a canned report, for exercising aggregation.
    struct Fixed {
        category: SignalCategory,
        score: f64,
        warnings: usize,
    }

    impl SignalDetector for Fixed {
        fn category(&self) -> SignalCategory {
            self.category
        }

        fn detect(&self, _text: &str) -> SignalReport {
            let warnings = (0..self.warnings)
                .map(|i| format!("{} warning {i}", self.category))
                .collect();
            SignalReport::clamped(self.score, warnings)
        }
    }

    fn fixed(category: SignalCategory, score: f64, warnings: usize) -> Box<dyn SignalDetector> {
        Box::new(Fixed { category, score, warnings })
    }

    // ── Worked examples ───────────────────────────────────────────────────────

    #[test]
    fn attributed_claim_has_factual_warning_only() {
        let result = validator().validate(
            "According to recent studies, the sky is always blue everywhere on Earth.",
            None,
            ValidationMode::Comprehensive,
        );

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].starts_with("Unsupported factual claim detected"));
        assert!(
            !result.warnings.iter().any(|w| w.contains("No citations")),
            "\"according to\" is itself an attribution: {:?}",
            result.warnings
        );
        assert!(!result.warnings.iter().any(|w| w.contains("contradiction")));

        // 0.8 * 0.4 + 1.0 * 0.3 + 1.0 * 0.3
        assert!((result.score - 0.92).abs() < 1e-9);
        assert_eq!(result.confidence, ConfidenceLevel::High);
        assert!(result.is_valid);
    }

    #[test]
    fn unattributed_generalization_loses_source_points() {
        let result = validator().validate(
            "All birds can fly, but penguins cannot fly.",
            None,
            ValidationMode::Comprehensive,
        );

        assert_eq!(result.warnings, vec!["No citations or source attributions found"]);
        let source = result.details[&SignalCategory::Source];
        assert!((source.score - 0.6).abs() < 1e-9);
        assert_eq!(source.warning_count, 1);
        assert_eq!(result.details[&SignalCategory::Logical].warning_count, 0);

        // 1.0 * 0.4 + 1.0 * 0.3 + 0.6 * 0.3
        assert!((result.score - 0.88).abs() < 1e-9);
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
        assert!(result.is_valid);
    }

    #[test]
    fn warnings_follow_detector_order() {
        let text = "Studies show it is always true and never false.";
        let result = validator().validate(text, None, ValidationMode::Comprehensive);

        assert_eq!(result.warnings.len(), 3);
        assert!(result.warnings[0].starts_with("Unsupported factual claim"));
        assert!(result.warnings[1].starts_with("Potential contradiction"));
        assert!(result.warnings[2].starts_with("No citations"));
        // 0.8 * 0.4 + 0.7 * 0.3 + 0.6 * 0.3
        assert!((result.score - 0.71).abs() < 1e-9);
        assert_eq!(result.confidence, ConfidenceLevel::Medium);
    }

    // ── Aggregation ───────────────────────────────────────────────────────────

    #[test]
    fn score_is_weighted_sum_of_sub_scores() {
        let v = OutputValidator::from_detectors(
            ValidatorConfig::default(),
            vec![
                fixed(SignalCategory::Factual, 0.5, 0),
                fixed(SignalCategory::Logical, 1.0, 0),
                fixed(SignalCategory::Source, 0.0, 0),
            ],
        )
        .unwrap();

        let result = v.validate("anything", None, ValidationMode::Quick);
        assert!((result.score - 0.5).abs() < 1e-9);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
        assert!(!result.is_valid);
        assert_eq!(result.details.len(), 3);
    }

    #[test]
    fn verdict_uses_threshold_not_tier() {
        let config = ValidatorConfig {
            confidence_threshold: 0.95,
            ..ValidatorConfig::default()
        };
        let result = OutputValidator::new(config)
            .unwrap()
            .validate("According to recent studies, the sky is blue.", None, ValidationMode::Comprehensive);

        assert_eq!(result.confidence, ConfidenceLevel::High);
        assert!(!result.is_valid, "0.92 is HIGH but below a 0.95 threshold");
    }

    #[test]
    fn disabled_detectors_shrink_the_maximum() {
        let config = ValidatorConfig {
            enable_source_attribution: false,
            ..ValidatorConfig::default()
        };
        let v = OutputValidator::new(config).unwrap();
        assert_eq!(
            v.enabled_categories(),
            vec![SignalCategory::Factual, SignalCategory::Logical]
        );

        let result = v.validate("The capital of France is Paris.", None, ValidationMode::Comprehensive);
        assert!((result.score - 0.7).abs() < 1e-9, "no renormalization: {}", result.score);
        assert!(!result.details.contains_key(&SignalCategory::Source));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn all_detectors_disabled_scores_zero() {
        let config = ValidatorConfig {
            enable_factual_validation: false,
            enable_logical_consistency: false,
            enable_source_attribution: false,
            ..ValidatorConfig::default()
        };
        let result = OutputValidator::new(config)
            .unwrap()
            .validate("Anything at all.", None, ValidationMode::Comprehensive);

        assert_eq!(result.score, 0.0);
        assert!(result.details.is_empty());
        assert_eq!(result.confidence, ConfidenceLevel::Insufficient);
        assert!(!result.is_valid);
    }

    #[test]
    fn mode_is_echoed_and_does_not_change_scoring() {
        let v = validator();
        let text = "Studies show it might be true [1].";
        let baseline = v.validate(text, None, ValidationMode::Comprehensive);

        for mode in ValidationMode::ALL {
            let result = v.validate(text, Some("ignored context"), mode);
            assert_eq!(result.validation_type, mode);
            assert_eq!(result.score, baseline.score);
            assert_eq!(result.details, baseline.details);
            assert_eq!(result.warnings, baseline.warnings);
        }
    }

    #[test]
    fn empty_text_still_produces_a_result() {
        let result = validator().validate("", None, ValidationMode::Quick);
        // Only the missing-citation penalty applies: 0.4 + 0.3 + 0.6 * 0.3.
        assert!((result.score - 0.88).abs() < 1e-9);
        assert_eq!(result.warnings.len(), 1);
    }

    // ── Warning truncation ────────────────────────────────────────────────────

    #[test]
    fn truncation_keeps_prefix_and_appends_summary() {
        let config = ValidatorConfig {
            max_warnings: 3,
            ..ValidatorConfig::default()
        };
        let v = OutputValidator::from_detectors(
            config,
            vec![
                fixed(SignalCategory::Factual, 1.0, 2),
                fixed(SignalCategory::Logical, 1.0, 2),
                fixed(SignalCategory::Source, 1.0, 2),
            ],
        )
        .unwrap();

        let result = v.validate("x", None, ValidationMode::Comprehensive);
        assert_eq!(result.warnings.len(), 4);
        assert_eq!(
            &result.warnings[..3],
            [
                "factual_validation warning 0",
                "factual_validation warning 1",
                "logical_consistency warning 0",
            ]
        );
        // Per-category counts are taken before truncation.
        assert_eq!(result.details[&SignalCategory::Source].warning_count, 2);
    }

    #[test]
    fn truncation_summary_counts_against_truncated_list() {
        let config = ValidatorConfig {
            max_warnings: 1,
            ..ValidatorConfig::default()
        };
        let v = OutputValidator::from_detectors(
            config,
            vec![fixed(SignalCategory::Factual, 1.0, 5)],
        )
        .unwrap();

        let result = v.validate("x", None, ValidationMode::Comprehensive);
        // Five warnings, one kept: the summary reads zero, not four.
        assert_eq!(
            result.warnings,
            vec!["factual_validation warning 0", "... and 0 more warnings"]
        );
    }

    #[test]
    fn no_summary_at_exact_limit() {
        let config = ValidatorConfig {
            max_warnings: 2,
            ..ValidatorConfig::default()
        };
        let v = OutputValidator::from_detectors(
            config,
            vec![fixed(SignalCategory::Factual, 1.0, 2)],
        )
        .unwrap();

        let result = v.validate("x", None, ValidationMode::Comprehensive);
        assert_eq!(result.warnings.len(), 2);
    }

    // ── Construction ──────────────────────────────────────────────────────────

    #[test]
    fn invalid_threshold_aborts_construction() {
        let config = ValidatorConfig {
            confidence_threshold: 2.0,
            ..ValidatorConfig::default()
        };
        let err = OutputValidator::new(config).err().unwrap();
        assert!(matches!(err, LithiumError::InvalidConfiguration { .. }));
    }

    #[test]
    fn shared_validator_is_usable_across_threads() {
        let v = validator();
        let shared = &v;
        let texts = ["Studies show X.", "Perhaps Y [Doe 2021].", "Always and never."];

        let threaded: Vec<f64> = std::thread::scope(|s| {
            let handles: Vec<_> = texts
                .iter()
                .map(|t| s.spawn(move || shared.validate(t, None, ValidationMode::Quick).score))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for (text, score) in texts.iter().zip(threaded) {
            assert_eq!(score, v.validate(text, None, ValidationMode::Quick).score);
        }
    }
}
