//! Logical-consistency detector.
//!
//! Flags absolute words that contradict each other within one text and
//! gives a small bonus to multi-sentence text that uses transition words.

use std::sync::Arc;

use tracing::debug;

use lithium_contracts::result::SignalCategory;
use lithium_rules::RuleCatalog;

use crate::traits::{SignalDetector, SignalReport};

/// Deducted per contradiction pair whose two words both appear.
const CONTRADICTION_PENALTY: f64 = 0.3;
/// Flat bonus for transitions in multi-segment text, regardless of count.
const TRANSITION_BONUS: f64 = 0.1;

pub struct LogicalConsistencyDetector {
    catalog: Arc<RuleCatalog>,
}

impl LogicalConsistencyDetector {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }
}

impl SignalDetector for LogicalConsistencyDetector {
    fn category(&self) -> SignalCategory {
        SignalCategory::Logical
    }

    fn detect(&self, text: &str) -> SignalReport {
        let mut score = 1.0;
        let mut warnings = Vec::new();

        for pair in self.catalog.contradiction_pairs() {
            if pair.both_present(text) {
                warnings.push(format!(
                    "Potential contradiction detected: {} vs {}",
                    pair.positive, pair.negative
                ));
                score -= CONTRADICTION_PENALTY;
            }
        }

        let segments = self.catalog.segment_count(text);
        let mut has_transitions = false;
        if segments > 1 {
            let lowered = text.to_lowercase();
            has_transitions = self
                .catalog
                .transition_markers()
                .iter()
                .any(|marker| lowered.contains(marker.as_str()));
            if has_transitions {
                score += TRANSITION_BONUS;
            }
        }

        debug!(
            contradictions = warnings.len(),
            segments,
            has_transitions,
            raw_score = score,
            "logical consistency scored"
        );
        SignalReport::clamped(score, warnings)
    }
}
