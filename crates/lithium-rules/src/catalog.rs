//! Compiled rule catalog.
//!
//! `RuleCatalog` is built once per engine from a `RuleSet` and is read-only
//! afterwards, so detectors can share it behind an `Arc` without locking.
//!
//! Every pattern is compiled up front. A malformed pattern is reported as
//! `LithiumError::InvalidConfiguration` and no catalog is produced.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use lithium_contracts::error::{LithiumError, LithiumResult};

use crate::rule::RuleSet;

/// Splits text into sentence-like segments.
const SENTENCE_DELIMITER: &str = r"[.!?]+";

/// Any square-bracketed span, used to spot stub citations like `[1]`.
const BRACKETED_SPAN: &str = r"\[[^\]]*\]";

/// A pattern together with the source string it was compiled from.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub source: String,
    pub regex: Regex,
}

/// A contradiction pair with whole-word matchers for both sides.
#[derive(Debug, Clone)]
pub struct CompiledPair {
    pub positive: String,
    pub negative: String,
    positive_re: Regex,
    negative_re: Regex,
}

impl CompiledPair {
    /// True when both words occur in `text` as whole words.
    pub fn both_present(&self, text: &str) -> bool {
        self.positive_re.is_match(text) && self.negative_re.is_match(text)
    }
}

/// The immutable pattern tables detectors read from.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    factual: Vec<CompiledPattern>,
    uncertainty: Vec<CompiledPattern>,
    citation: Vec<CompiledPattern>,
    contradictions: Vec<CompiledPair>,
    transition_markers: Vec<String>,
    sentence_delimiter: Regex,
    bracketed_span: Regex,
}

impl RuleCatalog {
    /// Compile the built-in rule set.
    pub fn builtin() -> LithiumResult<Self> {
        Self::compile(&RuleSet::default())
    }

    /// Compile every pattern in `rules`.
    pub fn compile(rules: &RuleSet) -> LithiumResult<Self> {
        let catalog = Self {
            factual: compile_group("factual_patterns", &rules.factual_patterns)?,
            uncertainty: compile_group("uncertainty_indicators", &rules.uncertainty_indicators)?,
            citation: compile_group("citation_patterns", &rules.citation_patterns)?,
            contradictions: rules
                .contradiction_pairs
                .iter()
                .map(|pair| {
                    Ok(CompiledPair {
                        positive: pair.positive.clone(),
                        negative: pair.negative.clone(),
                        positive_re: whole_word(&pair.positive)?,
                        negative_re: whole_word(&pair.negative)?,
                    })
                })
                .collect::<LithiumResult<Vec<_>>>()?,
            transition_markers: rules
                .transition_markers
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            sentence_delimiter: build("sentence_delimiter", SENTENCE_DELIMITER)?,
            bracketed_span: build("bracketed_span", BRACKETED_SPAN)?,
        };

        debug!(
            factual = catalog.factual.len(),
            uncertainty = catalog.uncertainty.len(),
            citation = catalog.citation.len(),
            contradictions = catalog.contradictions.len(),
            transitions = catalog.transition_markers.len(),
            "rule catalog compiled"
        );

        Ok(catalog)
    }

    /// Parse `s` as a TOML rule set and compile it.
    pub fn from_toml_str(s: &str) -> LithiumResult<Self> {
        let rules: RuleSet = toml::from_str(s)
            .map_err(|e| LithiumError::config(format!("failed to parse rule TOML: {e}")))?;
        Self::compile(&rules)
    }

    /// Read the file at `path` and compile it as a TOML rule set.
    pub fn from_file(path: &Path) -> LithiumResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| LithiumError::Io {
            reason: format!("failed to read rule file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn factual_patterns(&self) -> &[CompiledPattern] {
        &self.factual
    }

    pub fn uncertainty_indicators(&self) -> &[CompiledPattern] {
        &self.uncertainty
    }

    pub fn citation_patterns(&self) -> &[CompiledPattern] {
        &self.citation
    }

    pub fn contradiction_pairs(&self) -> &[CompiledPair] {
        &self.contradictions
    }

    /// Lower-cased transition words, matched as plain substrings.
    pub fn transition_markers(&self) -> &[String] {
        &self.transition_markers
    }

    /// Number of segments `text` splits into on sentence-terminal punctuation.
    ///
    /// Trailing punctuation yields a trailing empty segment, so "Done." counts
    /// as two segments.
    pub fn segment_count(&self, text: &str) -> usize {
        self.sentence_delimiter.split(text).count()
    }

    /// Every `[...]` span in `text`, brackets included.
    pub fn bracketed_spans<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.bracketed_span
            .find_iter(text)
            .map(|m| m.as_str())
            .collect()
    }
}

fn build(group: &str, pattern: &str) -> LithiumResult<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            warn!(group, pattern, error = %e, "rule pattern failed to compile");
            LithiumError::config(format!("invalid pattern '{pattern}' in {group}: {e}"))
        })
}

fn compile_group(group: &str, patterns: &[String]) -> LithiumResult<Vec<CompiledPattern>> {
    patterns
        .iter()
        .map(|source| {
            Ok(CompiledPattern {
                source: source.clone(),
                regex: build(group, source)?,
            })
        })
        .collect()
}

fn whole_word(word: &str) -> LithiumResult<Regex> {
    build("contradiction_pairs", &format!(r"\b{}\b", regex::escape(word)))
}
