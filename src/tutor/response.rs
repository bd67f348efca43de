use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Canned answer served whenever a completion attempt fails.
pub const FALLBACK_MESSAGE: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// Structured tutor reply: one of three shapes keyed by `response_type`.
///
/// Serialized form is `{ "response_type": ..., "content": ... }`. A payload
/// whose content does not match its tag fails deserialization outright and
/// is handled as an error, never as a partial value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response_type", content = "content", rename_all = "snake_case")]
pub enum TutorResponse {
    ConceptExplanation(ConceptExplanation),
    ExerciseSolution(ExerciseSolution),
    GeneralAnswer(String),
}

/// Explanation of a single concept, with optional examples and pointers to
/// related material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptExplanation {
    pub title: String,
    pub summary: String,
    pub detailed_explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_concepts: Option<Vec<String>>,
}

/// Worked exercise solution. `visualization_data` is an uninterpreted
/// payload passed through to the client as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSolution {
    pub problem_statement: String,
    pub solution_steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visualization_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_resources: Option<Vec<String>>,
}

impl TutorResponse {
    /// The fixed answer served for any completion failure.
    pub fn fallback() -> Self {
        TutorResponse::GeneralAnswer(FALLBACK_MESSAGE.to_string())
    }

    /// Text recorded in the conversation transcript for this response: the
    /// answer itself for general replies, the JSON-encoded content for
    /// structured ones.
    pub fn message_text(&self) -> String {
        match self {
            TutorResponse::GeneralAnswer(text) => text.clone(),
            TutorResponse::ConceptExplanation(content) => {
                serde_json::to_string(content).unwrap_or_default()
            }
            TutorResponse::ExerciseSolution(content) => {
                serde_json::to_string(content).unwrap_or_default()
            }
        }
    }
}

/// JSON schema constraining the completion endpoint to the three response
/// variants; attached to every request as part of `response_format`.
pub fn response_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "response_type": {
                "type": "string",
                "enum": ["concept_explanation", "exercise_solution", "general_answer"]
            },
            "content": {
                "oneOf": [
                    {
                        "type": "object",
                        "properties": {
                            "title": { "type": "string" },
                            "summary": { "type": "string" },
                            "detailed_explanation": { "type": "string" },
                            "examples": {
                                "type": "array",
                                "items": { "type": "string" }
                            },
                            "related_concepts": {
                                "type": "array",
                                "items": { "type": "string" }
                            }
                        },
                        "required": ["title", "summary", "detailed_explanation"]
                    },
                    {
                        "type": "object",
                        "properties": {
                            "problem_statement": { "type": "string" },
                            "solution_steps": {
                                "type": "array",
                                "items": { "type": "string" }
                            },
                            "code_example": { "type": "string" },
                            "visualization_data": { "type": "object" },
                            "additional_resources": {
                                "type": "array",
                                "items": { "type": "string" }
                            }
                        },
                        "required": ["problem_statement", "solution_steps"]
                    },
                    { "type": "string" }
                ]
            }
        },
        "required": ["response_type", "content"]
    })
}
