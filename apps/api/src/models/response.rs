//! Wire types for the response-generation result.

use serde::{Deserialize, Serialize};

/// Status message attached to every successful generation result.
pub const RESPONSES_GENERATED_MESSAGE: &str = "Generated responses for form fields";

/// One generated answer, tied to a form field id from the request.
/// The value may be empty and may span multiple lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldResponse {
    pub field_id: i64,
    pub field_value: String,
}

/// Result body for POST /api/v1/responses/generate.
///
/// `button_action` and `is_submission_complete` belong to the page-analysis
/// pipeline and are always `None`/`false` here; they stay on the wire type so
/// the extension consumes one response shape for both pipelines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub field_responses: Vec<FieldResponse>,
    pub button_action: Option<String>,
    pub is_submission_complete: bool,
    pub message: String,
}

impl GenerationResult {
    /// Wraps accepted field responses with the constant message and the
    /// null/false auxiliary defaults.
    pub fn from_responses(field_responses: Vec<FieldResponse>) -> Self {
        Self {
            field_responses,
            button_action: None,
            is_submission_complete: false,
            message: RESPONSES_GENERATED_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_to_camel_case() {
        let result = GenerationResult::from_responses(vec![FieldResponse {
            field_id: 3,
            field_value: "Two\nlines".to_string(),
        }]);

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["fieldResponses"][0]["fieldId"], 3);
        assert_eq!(value["fieldResponses"][0]["fieldValue"], "Two\nlines");
        assert_eq!(value["buttonAction"], serde_json::Value::Null);
        assert_eq!(value["isSubmissionComplete"], false);
        assert_eq!(value["message"], RESPONSES_GENERATED_MESSAGE);
    }

    #[test]
    fn test_from_responses_sets_auxiliary_defaults() {
        let result = GenerationResult::from_responses(vec![]);
        assert!(result.field_responses.is_empty());
        assert!(result.button_action.is_none());
        assert!(!result.is_submission_complete);
    }
}
