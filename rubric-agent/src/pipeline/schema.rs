//! Output schemas for the structured steps (input parser and evaluation router).

use serde_json::json;

use crate::llm::OutputSchema;

pub const PARSED_INPUT_SCHEMA: &str = "parsed_input";
pub const ROUTE_QUERY_SCHEMA: &str = "route_query";

/// Schema of `ParsedInput`: the fields extracted from the teacher's request.
pub fn parsed_input_schema() -> OutputSchema {
    OutputSchema {
        name: PARSED_INPUT_SCHEMA.to_string(),
        description: Some("Structured fields parsed from the teacher's request.".to_string()),
        parameters: json!({
            "type": "object",
            "properties": {
                "grade_level": {
                    "type": "integer",
                    "description": "School grade level of the student"
                },
                "topic": {
                    "type": "string",
                    "description": "Detailed task, e.g. essay writing, graph interpretation"
                },
                "objective": {
                    "type": "string",
                    "description": "Assessment purpose"
                },
                "name": {
                    "type": ["string", "null"],
                    "description": "Student name, or null if not given"
                },
                "student_submission": {
                    "type": ["string", "null"],
                    "description": "The submitted assignment verbatim, or null if none"
                }
            },
            "required": ["grade_level", "topic", "objective"]
        }),
    }
}

/// Schema of the router's yes/no answer.
pub fn route_query_schema() -> OutputSchema {
    OutputSchema {
        name: ROUTE_QUERY_SCHEMA.to_string(),
        description: Some("Whether the student's submission should be evaluated.".to_string()),
        parameters: json!({
            "type": "object",
            "properties": {
                "binary_score": {
                    "type": "string",
                    "enum": ["yes", "no"],
                    "description": "Evaluation required, 'yes' or 'no'"
                }
            },
            "required": ["binary_score"]
        }),
    }
}
