//! Validation outcome types.
//!
//! A `ValidationResult` is built once at the end of a `validate` call and
//! handed to the caller. Nothing inside the engine keeps or mutates it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LithiumError;

/// Coarse bucket derived from the aggregate score.
///
/// Variants are declared lowest-first so the derived ordering follows the
/// score: `Insufficient < Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    /// score < 0.5
    Insufficient,
    /// 0.5 <= score < 0.7
    Low,
    /// 0.7 <= score < 0.9
    Medium,
    /// score >= 0.9
    High,
}

impl ConfidenceLevel {
    /// Map an aggregate score onto its tier. Lower bounds are inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.9 {
            Self::High
        } else if score >= 0.7 {
            Self::Medium
        } else if score >= 0.5 {
            Self::Low
        } else {
            Self::Insufficient
        }
    }

    /// Lower-case name, as used in serialized results.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Insufficient => "insufficient",
        }
    }

    /// Upper-case name, as shown in human-readable reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
            Self::Insufficient => "INSUFFICIENT",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One independent axis of heuristic scoring.
///
/// Declaration order is the detector invocation order, and the derived
/// `Ord` keeps `details` maps in that order too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    #[serde(rename = "factual_validation")]
    Factual,
    #[serde(rename = "logical_consistency")]
    Logical,
    #[serde(rename = "source_attribution")]
    Source,
}

impl SignalCategory {
    /// All categories in invocation order.
    pub const ALL: [SignalCategory; 3] = [Self::Factual, Self::Logical, Self::Source];

    /// Fixed weight applied to this category's sub-score.
    pub fn weight(self) -> f64 {
        match self {
            Self::Factual => 0.4,
            Self::Logical => 0.3,
            Self::Source => 0.3,
        }
    }

    /// Key used in the `details` map.
    pub fn key(self) -> &'static str {
        match self {
            Self::Factual => "factual_validation",
            Self::Logical => "logical_consistency",
            Self::Source => "source_attribution",
        }
    }

    /// Title-cased name for reports, e.g. "Factual Validation".
    pub fn title(self) -> &'static str {
        match self {
            Self::Factual => "Factual Validation",
            Self::Logical => "Logical Consistency",
            Self::Source => "Source Attribution",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-category outcome recorded in `ValidationResult::details`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// Unweighted, clamped sub-score in `[0.0, 1.0]`.
    pub score: f64,
    /// Warnings this category emitted, before truncation.
    pub warning_count: usize,
}

/// The scoring profile a caller asks for.
///
/// Echoed into the result. Every mode currently runs the same set of
/// enabled detectors with the same weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    Quick,
    #[default]
    Comprehensive,
    Factual,
    Logical,
    Sources,
}

impl ValidationMode {
    pub const ALL: [ValidationMode; 5] = [
        Self::Quick,
        Self::Comprehensive,
        Self::Factual,
        Self::Logical,
        Self::Sources,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Comprehensive => "comprehensive",
            Self::Factual => "factual",
            Self::Logical => "logical",
            Self::Sources => "sources",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = LithiumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| LithiumError::InvalidArgument {
                reason: format!(
                    "unknown validation type '{s}' (expected one of quick, comprehensive, factual, logical, sources)"
                ),
            })
    }
}

/// The outcome of one `validate` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when `score >= confidence_threshold`.
    pub is_valid: bool,
    /// Tier derived from `score`, independent of `is_valid`.
    pub confidence: ConfidenceLevel,
    /// Weighted sum of enabled sub-scores. Not renormalized when detectors
    /// are disabled.
    pub score: f64,
    /// One entry per detector that ran.
    pub details: BTreeMap<SignalCategory, CategoryDetail>,
    /// Warnings in detector order, possibly truncated with a trailing summary.
    pub warnings: Vec<String>,
    /// Wall-clock creation time (UTC).
    pub timestamp: DateTime<Utc>,
    /// The requested mode, echoed back.
    pub validation_type: ValidationMode,
}

impl ValidationResult {
    /// Plain key/value rendering suitable for JSON emission.
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "is_valid": self.is_valid,
            "confidence": self.confidence.as_str(),
            "score": self.score,
            "details": self
                .details
                .iter()
                .map(|(category, detail)| {
                    (
                        category.key().to_string(),
                        serde_json::json!({
                            "score": detail.score,
                            "warning_count": detail.warning_count,
                        }),
                    )
                })
                .collect::<serde_json::Map<_, _>>(),
            "warnings": self.warnings,
            "timestamp": self.timestamp.to_rfc3339(),
            "validation_type": self.validation_type.as_str(),
        })
    }
}
