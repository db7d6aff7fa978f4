//! Tool catalogue exposed to the host.
//!
//! Each tool carries a JSON Schema for its arguments. The server validates
//! incoming arguments against it before the engine is touched.

use serde_json::{json, Value};

/// The four operations the adapter exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    ValidateOutput,
    QuickCheck,
    GetConfidenceScore,
    BatchValidate,
}

impl Tool {
    pub const ALL: [Tool; 4] = [
        Self::ValidateOutput,
        Self::QuickCheck,
        Self::GetConfidenceScore,
        Self::BatchValidate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::ValidateOutput => "validate_output",
            Self::QuickCheck => "quick_check",
            Self::GetConfidenceScore => "get_confidence_score",
            Self::BatchValidate => "batch_validate",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ValidateOutput => "Validate AI-generated output for accuracy and reliability",
            Self::QuickCheck => "Quick validation check - returns true/false",
            Self::GetConfidenceScore => "Get confidence score for an output (0.0 to 1.0)",
            Self::BatchValidate => "Validate multiple outputs in batch",
        }
    }

    pub fn input_schema(self) -> Value {
        match self {
            Self::ValidateOutput => json!({
                "type": "object",
                "properties": {
                    "output": {
                        "type": "string",
                        "description": "The AI-generated content to validate"
                    },
                    "context": {
                        "type": "string",
                        "description": "Additional context for validation (optional)"
                    },
                    "validation_type": mode_schema()
                },
                "required": ["output"]
            }),
            Self::QuickCheck => single_output_schema("The AI-generated content to check"),
            Self::GetConfidenceScore => single_output_schema("The AI-generated content to score"),
            Self::BatchValidate => json!({
                "type": "object",
                "properties": {
                    "outputs": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "List of AI-generated contents to validate"
                    },
                    "validation_type": mode_schema()
                },
                "required": ["outputs"]
            }),
        }
    }

    /// The entry returned by `tools/list`.
    pub fn descriptor(self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputSchema": self.input_schema(),
        })
    }
}

fn mode_schema() -> Value {
    json!({
        "type": "string",
        "enum": ["quick", "comprehensive", "factual", "logical", "sources"],
        "default": "comprehensive",
        "description": "Type of validation to perform"
    })
}

fn single_output_schema(description: &str) -> Value {
    json!({
        "type": "object",
        "properties": {
            "output": { "type": "string", "description": description }
        },
        "required": ["output"]
    })
}
