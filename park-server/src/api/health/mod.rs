//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 健康检查 + 区域数量 |
//!
//! ```json
//! {
//!   "status": "ok",
//!   "service": "park-server",
//!   "version": "0.1.0",
//!   "zones": 4,
//!   "provider": "gemini",
//!   "uptimeSeconds": 12,
//!   "serverTime": "2025-01-01T00:00:00Z"
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    zones: usize,
    /// 当前使用的模型提供方
    provider: String,
    uptime_seconds: u64,
    server_time: String,
}

async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        zones: state.zones.len(),
        provider: state.flows.provider_name().to_string(),
        uptime_seconds: state.uptime_seconds(),
        server_time: chrono::Utc::now().to_rfc3339(),
    })
}
