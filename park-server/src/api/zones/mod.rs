//! Zone API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/zones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/book", post(handler::book))
        .route("/{id}/occupancy", put(handler::update_occupancy))
        .route("/{id}/vehicle-count", post(handler::vehicle_count))
}
