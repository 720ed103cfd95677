//! The structured reply the model is asked for, and the check applied to what comes back.

use super::error::ConflictCheckError;
use crate::model::AiAnalysisResult;
use serde_json::{json, Value};

/// Response schema in the generative API's dialect (upper-case type names).
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "safe": {
                "type": "BOOLEAN",
                "description": "True if the order seems safe and possible, False if there is a major conflict."
            },
            "message": {
                "type": "STRING",
                "description": "A friendly message to the customer explaining the conflict or confirming the special request."
            },
            "kitchenTicketSummary": {
                "type": "STRING",
                "description": "Concise, professional kitchen instructions (e.g., 'NO SALT, ALLERGY: PEANUT')."
            }
        },
        "required": ["safe", "message", "kitchenTicketSummary"]
    })
}

/// Parses the model's JSON text into a verdict.
pub fn parse_analysis(text: &str) -> Result<AiAnalysisResult, ConflictCheckError> {
    if text.trim().is_empty() {
        return Err(ConflictCheckError::EmptyResponse);
    }
    Ok(serde_json::from_str(text)?)
}
