//! # lithium-interface
//!
//! A simplified API over the Lithium-Validation engine, plus the text
//! renderings the command-line and tool-protocol front ends print.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use lithium_contracts::ValidationMode;
//! use lithium_interface::{quick_check, ValidationInterface};
//!
//! assert!(quick_check("The capital of France is Paris.")?);
//!
//! let interface = ValidationInterface::new(Default::default())?;
//! let results = interface.batch_validate(&["a.", "b."], ValidationMode::Quick);
//! ```

pub mod interface;
pub mod render;

pub use interface::{
    comprehensive_validate, quick_check, quick_validate, ValidationInterface, ValidationSummary,
};

// ── Tests ─────────────────────────────────────────────────────────────────────
