//! The detector seam.
//!
//! Each signal category is scored by one `SignalDetector`. Detectors are
//! independent of each other: the validator may run them in any order and
//! only combines their reports afterwards.

use lithium_contracts::result::SignalCategory;

/// One detector's verdict on a piece of text.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalReport {
    /// Sub-score, clamped to `[0.0, 1.0]`.
    pub score: f64,
    /// Human-readable findings, in the order they were detected.
    pub warnings: Vec<String>,
}

impl SignalReport {
    /// Build a report, clamping `raw` into `[0.0, 1.0]`.
    ///
    /// The unclamped intermediate value never leaves the detector.
    pub fn clamped(raw: f64, warnings: Vec<String>) -> Self {
        Self {
            score: raw.clamp(0.0, 1.0),
            warnings,
        }
    }
}

/// A pure scoring function over a single input text.
///
/// Implementations hold only read-only state, so one instance can be shared
/// across threads and called concurrently.
pub trait SignalDetector: Send + Sync {
    /// The category this detector scores; selects its weight and details key.
    fn category(&self) -> SignalCategory;

    /// Score `text`. Never fails: odd input just produces a low score.
    fn detect(&self, text: &str) -> SignalReport;
}
