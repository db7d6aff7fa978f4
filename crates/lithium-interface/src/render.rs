//! Human-readable renderings of validation results.
//!
//! Shared by the command-line front end and the tool-protocol adapter so
//! both present the same report.

use lithium_contracts::result::{ConfidenceLevel, ValidationResult};

/// Multi-line report: verdict, tier, score, per-category scores, warnings.
pub fn report(result: &ValidationResult) -> String {
    let mut out = String::new();
    out.push_str("Lithium-Validation Results\n");
    out.push_str(&"=".repeat(40));
    out.push('\n');
    out.push_str(&format!("Validation Type: {}\n", title_case(result.validation_type.as_str())));
    out.push_str(&format!("Valid: {}\n", yes_no(result.is_valid)));
    out.push_str(&format!("Confidence: {}\n", result.confidence.label()));
    out.push_str(&format!("Score: {:.2}\n", result.score));
    out.push_str(&format!(
        "Timestamp: {}\n",
        result.timestamp.format("%Y-%m-%d %H:%M:%S")
    ));

    if !result.details.is_empty() {
        out.push_str("\nDetailed Analysis:\n");
        for (category, detail) in &result.details {
            out.push_str(&format!("  - {}: {:.2}\n", category.title(), detail.score));
        }
    }

    if result.warnings.is_empty() {
        out.push_str("\nNo warnings found\n");
    } else {
        out.push_str(&format!("\nWarnings ({}):\n", result.warnings.len()));
        for (i, warning) in result.warnings.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, warning));
        }
    }

    out
}

/// Advice lines for a confidence tier.
pub fn recommendations(confidence: ConfidenceLevel) -> &'static [&'static str] {
    match confidence {
        ConfidenceLevel::Insufficient => &[
            "Consider adding more supporting evidence",
            "Review factual claims for accuracy",
            "Add proper citations and sources",
        ],
        ConfidenceLevel::Low => &[
            "Add more context or supporting information",
            "Consider adding uncertainty indicators",
        ],
        ConfidenceLevel::Medium => &[
            "Good validation score",
            "Consider minor improvements for higher confidence",
        ],
        ConfidenceLevel::High => &[
            "Excellent validation score",
            "Output meets high quality standards",
        ],
    }
}

/// Compact per-item listing for a batch run.
pub fn batch(results: &[ValidationResult]) -> String {
    let mut out = String::new();
    out.push_str("Batch Validation Results\n");
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!("Output {}:\n", i + 1));
        out.push_str(&format!("  Valid: {}\n", yes_no(result.is_valid)));
        out.push_str(&format!("  Confidence: {}\n", result.confidence.label()));
        out.push_str(&format!("  Score: {:.2}\n", result.score));
        if !result.warnings.is_empty() {
            out.push_str(&format!("  Warnings: {}\n", result.warnings.len()));
        }
        out.push('\n');
    }

    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
