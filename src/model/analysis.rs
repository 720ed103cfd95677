use serde::{Deserialize, Serialize};

/// Verdict of the conflict check for one ordered dish.
///
/// Field names on the wire are camelCase, matching the response schema sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    /// `false` only when the model reported a major conflict. Also `true` on fallback.
    pub safe: bool,
    /// Customer-facing explanation or confirmation.
    pub message: String,
    /// Kitchen shorthand, e.g. `NO SALT, ALLERGY: PEANUT`.
    pub kitchen_ticket_summary: String,
}
