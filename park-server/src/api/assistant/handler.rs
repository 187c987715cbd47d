use axum::{Json, extract::State};
use validator::Validate;

use shared::models::{AskAssistantInput, AskAssistantOutput};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/assistant - 回答停车相关问题
pub async fn ask(
    State(state): State<ServerState>,
    Json(payload): Json<AskAssistantInput>,
) -> AppResult<Json<AskAssistantOutput>> {
    payload.validate()?;
    let zones = state.zones.list_zones();
    let output = state.flows.ask_booking_assistant(&payload, &zones).await?;
    Ok(Json(output))
}
