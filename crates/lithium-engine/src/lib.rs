//! # lithium-engine
//!
//! The heuristic trust-scoring engine for Lithium-Validation.
//!
//! Three independent [`SignalDetector`](traits::SignalDetector)s score a text
//! on unsupported claims, internal contradiction and missing attribution.
//! [`OutputValidator`] runs the enabled ones, combines their sub-scores with
//! fixed weights (0.4 / 0.3 / 0.3), derives a confidence tier and checks the
//! configured threshold.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use lithium_contracts::{ValidationMode, ValidatorConfig};
//! use lithium_engine::OutputValidator;
//!
//! let validator = OutputValidator::new(ValidatorConfig::default())?;
//! let result = validator.validate("Studies show cats are mammals.", None, ValidationMode::Quick);
//! println!("{} ({:.2})", result.confidence, result.score);
//! ```

pub mod detectors;
pub mod traits;
pub mod validator;

pub use traits::{SignalDetector, SignalReport};
pub use validator::OutputValidator;
