//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::generation::parser::parse_generation_reply;
use crate::generation::prompt::build_prompt;
use crate::models::request::GenerationRequest;
use crate::models::response::GenerationResult;
use crate::state::AppState;

/// POST /api/v1/responses/generate
///
/// Full pipeline: build prompt → completion backend call → parse reply.
/// A partial parse is not an error — the caller gets however many field
/// responses the reply yielded. Only a transport failure becomes a 500.
pub async fn handle_generate_responses(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    if request.form_fields.is_empty() {
        return Err(AppError::Validation(
            "formFields cannot be empty".to_string(),
        ));
    }

    let prompt = build_prompt(&request);
    info!(
        "Generating responses for {} form fields (prompt: {} chars)",
        request.form_fields.len(),
        prompt.len()
    );

    let reply = state
        .llm
        .complete(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Completion call failed: {e}")))?;

    let result = parse_generation_reply(&reply, &request.form_fields);
    info!(
        "Parsed {} field responses from reply for {} requested fields",
        result.field_responses.len(),
        request.form_fields.len()
    );

    Ok(Json(result))
}
