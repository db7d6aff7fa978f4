//! # lithium-rules
//!
//! The rule catalog for Lithium-Validation: pattern tables grouped by signal
//! category, loadable from TOML and compiled once into an immutable
//! [`RuleCatalog`].
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use lithium_rules::RuleCatalog;
//!
//! let builtin = RuleCatalog::builtin()?;
//! let custom = RuleCatalog::from_file(Path::new("rules/strict.toml"))?;
//! ```

pub mod catalog;
pub mod rule;

pub use catalog::{CompiledPair, CompiledPattern, RuleCatalog};
pub use rule::{ContradictionPair, RuleSet};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::io::Write;

    use lithium_contracts::error::LithiumError;

    use crate::{RuleCatalog, RuleSet};

    // ── Built-in table ────────────────────────────────────────────────────────

    #[test]
    fn builtin_catalog_compiles() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert_eq!(catalog.factual_patterns().len(), 5);
        assert_eq!(catalog.uncertainty_indicators().len(), 6);
        assert_eq!(catalog.citation_patterns().len(), 5);
        assert_eq!(catalog.contradiction_pairs().len(), 4);
        assert_eq!(catalog.transition_markers().len(), 5);
    }

    #[test]
    fn patterns_match_case_insensitively() {
        let catalog = RuleCatalog::builtin().unwrap();
        let studies = catalog
            .factual_patterns()
            .iter()
            .find(|p| p.source == "studies show")
            .unwrap();
        assert!(studies.regex.is_match("STUDIES SHOW that it works"));
    }

    #[test]
    fn contradiction_pairs_match_whole_words_only() {
        let catalog = RuleCatalog::builtin().unwrap();
        let every_no = catalog
            .contradiction_pairs()
            .iter()
            .find(|p| p.positive == "every")
            .unwrap();

        assert!(every_no.both_present("Every cat has no tail."));
        // "everywhere" and "know" must not count as "every" / "no".
        assert!(!every_no.both_present("Cats are everywhere, you know."));
    }

    #[test]
    fn segment_count_includes_trailing_empty_segment() {
        let catalog = RuleCatalog::builtin().unwrap();
        assert_eq!(catalog.segment_count("No punctuation here"), 1);
        assert_eq!(catalog.segment_count("One sentence."), 2);
        assert_eq!(catalog.segment_count("First! Second?! Third"), 3);
    }

    #[test]
    fn bracketed_spans_are_found_in_order() {
        let catalog = RuleCatalog::builtin().unwrap();
        let spans = catalog.bracketed_spans("See [1] and [Smith 2020] and []");
        assert_eq!(spans, vec!["[1]", "[Smith 2020]", "[]"]);
    }

    // ── TOML loading ──────────────────────────────────────────────────────────

    #[test]
    fn toml_overrides_only_named_groups() {
        let toml = r#"
            factual_patterns = ["experts agree"]
            transition_markers = ["Consequently"]
        "#;

        let catalog = RuleCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.factual_patterns().len(), 1);
        assert_eq!(catalog.factual_patterns()[0].source, "experts agree");
        assert_eq!(catalog.transition_markers(), ["consequently".to_string()]);
        // Untouched groups keep the built-in table.
        assert_eq!(catalog.citation_patterns().len(), 5);
    }

    #[test]
    fn toml_contradiction_pairs() {
        let toml = r#"
            [[contradiction_pairs]]
            positive = "increase"
            negative = "decrease"
        "#;

        let catalog = RuleCatalog::from_toml_str(toml).unwrap();
        assert_eq!(catalog.contradiction_pairs().len(), 1);
        assert!(catalog.contradiction_pairs()[0].both_present("Prices increase, then decrease."));
    }

    #[test]
    fn malformed_pattern_is_invalid_configuration() {
        let rules = RuleSet {
            citation_patterns: vec!["(unclosed".to_string()],
            ..RuleSet::default()
        };

        let err = RuleCatalog::compile(&rules).unwrap_err();
        match err {
            LithiumError::InvalidConfiguration { reason } => {
                assert!(reason.contains("(unclosed"), "reason should quote the pattern: {reason}");
                assert!(reason.contains("citation_patterns"));
            }
            other => panic!("expected InvalidConfiguration, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_invalid_configuration() {
        let err = RuleCatalog::from_toml_str("factual_patterns = [").unwrap_err();
        assert!(matches!(err, LithiumError::InvalidConfiguration { .. }));
    }

    #[test]
    fn unknown_rule_group_is_rejected() {
        let err = RuleCatalog::from_toml_str(r#"hedges = ["maybe"]"#).unwrap_err();
        assert!(matches!(err, LithiumError::InvalidConfiguration { .. }));
    }

    #[test]
    fn from_file_reads_rules() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"uncertainty_indicators = ["arguably"]"#).unwrap();

        let catalog = RuleCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.uncertainty_indicators().len(), 1);
    }

    #[test]
    fn from_file_missing_is_io_error() {
        let err = RuleCatalog::from_file(std::path::Path::new("/nonexistent/rules.toml"))
            .unwrap_err();
        assert!(matches!(err, LithiumError::Io { .. }));
    }
}
