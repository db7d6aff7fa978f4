//! The three built-in signal detectors.

pub mod factual;
pub mod logical;
pub mod source;

pub use factual::FactualClaimDetector;
pub use logical::LogicalConsistencyDetector;
pub use source::SourceAttributionDetector;
