//! Rule set schema.
//!
//! A `RuleSet` is the uncompiled form of the catalog: plain pattern strings
//! grouped by signal category. It deserializes from TOML, and any key left
//! out of the document falls back to the built-in table.
//!
//! Example:
//! ```toml
//! factual_patterns = ["studies show", "experts agree"]
//! citation_patterns = ['\[\d+\]', "source:"]
//!
//! [[contradiction_pairs]]
//! positive = "always"
//! negative = "never"
//! ```

use serde::{Deserialize, Serialize};

/// Two words that contradict each other when both appear in one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContradictionPair {
    pub positive: String,
    pub negative: String,
}

impl ContradictionPair {
    pub fn new(positive: impl Into<String>, negative: impl Into<String>) -> Self {
        Self {
            positive: positive.into(),
            negative: negative.into(),
        }
    }
}

/// Pattern tables for every signal category.
///
/// Pattern strings use `regex` crate syntax and are matched
/// case-insensitively once compiled into a `RuleCatalog`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSet {
    /// Phrasings that assert a fact without backing it up.
    #[serde(default = "default_factual_patterns")]
    pub factual_patterns: Vec<String>,

    /// Hedges that signal appropriate uncertainty. Each match is rewarded.
    #[serde(default = "default_uncertainty_indicators")]
    pub uncertainty_indicators: Vec<String>,

    /// Markers of a citation or attribution. Any single match counts.
    #[serde(default = "default_citation_patterns")]
    pub citation_patterns: Vec<String>,

    /// Whole-word pairs treated as a contradiction when both are present.
    #[serde(default = "default_contradiction_pairs")]
    pub contradiction_pairs: Vec<ContradictionPair>,

    /// Connectives that indicate a deliberate line of reasoning.
    #[serde(default = "default_transition_markers")]
    pub transition_markers: Vec<String>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            factual_patterns: default_factual_patterns(),
            uncertainty_indicators: default_uncertainty_indicators(),
            citation_patterns: default_citation_patterns(),
            contradiction_pairs: default_contradiction_pairs(),
            transition_markers: default_transition_markers(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn default_factual_patterns() -> Vec<String> {
    strings(&[
        r"according to [^,]+,",
        r"studies show",
        r"research indicates",
        r"data suggests",
        r"statistics show",
    ])
}

fn default_uncertainty_indicators() -> Vec<String> {
    strings(&[
        r"might be",
        r"could be",
        r"possibly",
        r"perhaps",
        r"it seems",
        r"appears to",
    ])
}

fn default_citation_patterns() -> Vec<String> {
    strings(&[
        r"\[[\d\w\s,]+\]",
        r"\([^)]*20\d{2}[^)]*\)",
        r"source:",
        r"reference:",
        r"according to",
    ])
}

fn default_contradiction_pairs() -> Vec<ContradictionPair> {
    vec![
        ContradictionPair::new("always", "never"),
        ContradictionPair::new("all", "none"),
        ContradictionPair::new("every", "no"),
        ContradictionPair::new("completely", "partially"),
    ]
}

fn default_transition_markers() -> Vec<String> {
    strings(&["however", "therefore", "moreover", "furthermore", "additionally"])
}
