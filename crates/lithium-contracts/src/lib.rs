//! # lithium-contracts
//!
//! Shared types, configuration, and error contracts for Lithium-Validation.
//!
//! Every crate in the workspace imports from here. No scoring logic lives in
//! this crate, only data definitions and the error type.

pub mod config;
pub mod error;
pub mod result;

pub use config::{ConfigPatch, ValidatorConfig};
pub use error::{LithiumError, LithiumResult};
pub use result::{CategoryDetail, ConfidenceLevel, SignalCategory, ValidationMode, ValidationResult};
