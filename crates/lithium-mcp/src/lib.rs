//! # lithium-mcp
//!
//! Exposes the Lithium-Validation interface to tool-calling hosts over a
//! line-delimited JSON-RPC stdio transport.
//!
//! Four tools map one-to-one onto the interface: `validate_output`,
//! `quick_check`, `get_confidence_score` and `batch_validate`. Tool results
//! are text renderings of the validation result. Arguments are checked
//! against each tool's JSON Schema before the engine runs.

pub mod server;
pub mod tools;

pub use server::{ToolOutcome, ToolServer};
pub use tools::Tool;

// ── Tests ─────────────────────────────────────────────────────────────────────
