//! Factual-claim detector.
//!
//! Penalises phrasings that assert facts without support and rewards hedging
//! language that signals appropriate uncertainty.

use std::sync::Arc;

use tracing::debug;

use lithium_contracts::result::SignalCategory;
use lithium_rules::RuleCatalog;

use crate::traits::{SignalDetector, SignalReport};

/// Deducted once per factual pattern that matches anywhere in the text.
const CLAIM_PENALTY: f64 = 0.2;
/// Added per uncertainty-indicator match.
const HEDGE_BONUS: f64 = 0.1;
/// Ceiling on the total hedge bonus.
const HEDGE_BONUS_CAP: f64 = 0.3;

pub struct FactualClaimDetector {
    catalog: Arc<RuleCatalog>,
}

impl FactualClaimDetector {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }
}

impl SignalDetector for FactualClaimDetector {
    fn category(&self) -> SignalCategory {
        SignalCategory::Factual
    }

    fn detect(&self, text: &str) -> SignalReport {
        let mut score = 1.0;
        let mut warnings = Vec::new();

        // Each matching pattern costs independently; distinct phrasings stack.
        for pattern in self.catalog.factual_patterns() {
            if let Some(m) = pattern.regex.find(text) {
                warnings.push(format!("Unsupported factual claim detected: {}", m.as_str()));
                score -= CLAIM_PENALTY;
            }
        }

        let hedges: usize = self
            .catalog
            .uncertainty_indicators()
            .iter()
            .map(|pattern| pattern.regex.find_iter(text).count())
            .sum();
        if hedges > 0 {
            score += (hedges as f64 * HEDGE_BONUS).min(HEDGE_BONUS_CAP);
        }

        debug!(claims = warnings.len(), hedges, raw_score = score, "factual claims scored");
        SignalReport::clamped(score, warnings)
    }
}
