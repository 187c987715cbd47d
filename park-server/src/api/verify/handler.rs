use axum::{Json, extract::State};
use validator::Validate;

use shared::models::{VerifyIdentityInput, VerifyIdentityOutput};

use crate::core::ServerState;
use crate::utils::AppResult;

/// POST /api/verify - 验证用户照片、车牌和手机号
pub async fn verify(
    State(state): State<ServerState>,
    Json(payload): Json<VerifyIdentityInput>,
) -> AppResult<Json<VerifyIdentityOutput>> {
    payload.validate()?;
    let output = state.flows.verify_identity(&payload).await?;
    tracing::info!(verified = output.is_verified, "Identity verification finished");
    Ok(Json(output))
}
