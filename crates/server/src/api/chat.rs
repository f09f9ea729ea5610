use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::instrument;

use super::AppState;
use super::schemas::{ChatRequest, ChatResponse, ErrorResponse};
use crate::error::ServerError;

/// `POST /api/chat` -- recommend an evaluation configuration for a message.
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    summary = "Recommend an evaluation configuration",
    description = "Classifies the message with the configured model and returns a dataset, metrics, scenario and agent drawn from the catalog.",
    request_body(content = ChatRequest, description = "User message"),
    responses(
        (status = 200, description = "Recommendation produced", body = ChatResponse),
        (status = 400, description = "Model call failed or returned an unusable answer", body = ErrorResponse),
        (status = 422, description = "Message failed validation", body = ErrorResponse),
        (status = 500, description = "Catalog could not be loaded", body = ErrorResponse)
    )
)]
#[instrument(skip_all)]
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ServerError> {
    let Json(request) = body?;
    let message = request.validate()?;
    let reply = state.chat.process_message(message).await?;
    Ok(Json(reply.into()))
}
