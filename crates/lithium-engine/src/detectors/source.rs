//! Source-attribution detector.
//!
//! Text with no citation marker at all is penalised. Text that does cite
//! something is then checked for stub bracket citations such as `[1]`.

use std::sync::Arc;

use tracing::debug;

use lithium_contracts::result::SignalCategory;
use lithium_rules::RuleCatalog;

use crate::traits::{SignalDetector, SignalReport};

const MISSING_CITATION_PENALTY: f64 = 0.4;
const INCOMPLETE_CITATION_PENALTY: f64 = 0.1;
/// Bracketed spans shorter than this many characters, brackets included,
/// count as incomplete.
const MIN_CITATION_CHARS: usize = 5;

pub struct SourceAttributionDetector {
    catalog: Arc<RuleCatalog>,
}

impl SourceAttributionDetector {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }
}

impl SignalDetector for SourceAttributionDetector {
    fn category(&self) -> SignalCategory {
        SignalCategory::Source
    }

    fn detect(&self, text: &str) -> SignalReport {
        let mut score = 1.0;
        let mut warnings = Vec::new();

        let has_citations = self
            .catalog
            .citation_patterns()
            .iter()
            .any(|pattern| pattern.regex.is_match(text));

        if has_citations {
            // Runs whichever citation pattern matched, so a bare "[1]" is
            // flagged even when the attribution came from "source:".
            for span in self.catalog.bracketed_spans(text) {
                if span.chars().count() < MIN_CITATION_CHARS {
                    warnings.push(format!("Incomplete citation: {span}"));
                    score -= INCOMPLETE_CITATION_PENALTY;
                }
            }
        } else {
            warnings.push("No citations or source attributions found".to_string());
            score -= MISSING_CITATION_PENALTY;
        }

        debug!(has_citations, findings = warnings.len(), raw_score = score, "source attribution scored");
        SignalReport::clamped(score, warnings)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lithium_rules::RuleCatalog;

    use super::SourceAttributionDetector;
    use crate::traits::SignalDetector;

    fn detector() -> SourceAttributionDetector {
        SourceAttributionDetector::new(Arc::new(RuleCatalog::builtin().unwrap()))
    }

    #[test]
    fn missing_citations_cost_point_four() {
        let report = detector().detect("All birds can fly, but penguins cannot fly.");
        assert_eq!(report.warnings, vec!["No citations or source attributions found"]);
        assert!((report.score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn according_to_counts_as_attribution() {
        let report = detector().detect("According to recent studies, the sky is blue.");
        assert!(report.warnings.is_empty());
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn year_in_parentheses_counts_as_attribution() {
        let report = detector().detect("Sea levels rose (IPCC, 2021).");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn full_bracket_citation_passes() {
        let report = detector().detect("Water boils at 100C [Smith 2020].");
        assert!(report.warnings.is_empty());
        assert_eq!(report.score, 1.0);
    }

    #[test]
    fn short_bracket_citations_are_incomplete() {
        // "[12]" matches the bracket citation form but is only four characters.
        let report = detector().detect("Water boils at 100C [12] and freezes at 0C [3].");
        assert_eq!(
            report.warnings,
            vec!["Incomplete citation: [12]", "Incomplete citation: [3]"]
        );
        assert!((report.score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn incomplete_check_runs_for_non_bracket_attribution() {
        // "[]" would not satisfy the bracket citation pattern; "source:" does.
        let report = detector().detect("Source: the survey. See [] for details.");
        assert_eq!(report.warnings, vec!["Incomplete citation: []"]);
        assert!((report.score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn brackets_without_any_citation_only_report_missing() {
        // "[?]" matches no citation pattern, so only the missing warning fires.
        let report = detector().detect("Nobody knows [?]");
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].starts_with("No citations"));
    }

    #[test]
    fn many_stub_citations_floor_at_zero() {
        let text = (0..12).map(|i| format!("[{i}]")).collect::<Vec<_>>().join(" ");
        let report = detector().detect(&text);
        assert_eq!(report.warnings.len(), 12);
        assert_eq!(report.score, 0.0);
    }
}
