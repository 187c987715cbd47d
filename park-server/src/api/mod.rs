//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`zones`] - 停车区域查询、预订、占用更新
//! - [`verify`] - 身份与车辆验证 (AI)
//! - [`assistant`] - 预订助手问答 (AI)

pub mod assistant;
pub mod health;
pub mod verify;
pub mod zones;

use axum::{Router, middleware};
use http::HeaderName;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// HTTP 请求日志中间件
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(zones::router())
        .merge(verify::router())
        .merge(assistant::router())
}

/// Build the fully configured application
///
/// Used by both the HTTP server and in-process tests
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .with_state(state)
        // ========== Tower HTTP Middleware ==========
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(REQUEST_ID_HEADER))
        .layer(SetRequestIdLayer::new(REQUEST_ID_HEADER, MakeRequestUuid))
}
