//! Zone API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use http::StatusCode;
use validator::Validate;

use shared::models::{
    BookingResult, CountVehiclesInput, OccupancyUpdate, OccupancyUpdateResult, ParkingZone,
    VehicleCountResult,
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use crate::zones::booking_result;

/// GET /api/zones - 获取所有区域
pub async fn list(State(state): State<ServerState>) -> Json<Vec<ParkingZone>> {
    Json(state.zones.list_zones())
}

/// GET /api/zones/:id - 获取单个区域
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ParkingZone>> {
    state
        .zones
        .get_zone(&id)
        .map(Json)
        .ok_or_else(|| AppError::zone_not_found(id))
}

/// POST /api/zones/:id/book - 预订一个车位
///
/// 失败时仍返回 `BookingResult`, 状态码 404 (区域不存在) 或 409 (已满)
pub async fn book(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> (StatusCode, Json<BookingResult>) {
    let outcome = state.zones.try_book(&id);
    let status = match &outcome {
        Ok(_) => StatusCode::OK,
        Err(e) => {
            tracing::info!(zone_id = %id, reason = %e, "Booking rejected");
            e.code().http_status()
        }
    };
    (status, Json(booking_result(outcome)))
}

/// PUT /api/zones/:id/occupancy - 按占用数更新可用车位
pub async fn update_occupancy(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OccupancyUpdate>,
) -> (StatusCode, Json<OccupancyUpdateResult>) {
    let result = state.zones.set_occupancy(&id, payload.occupied_spaces);
    let status = if result.success {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    (status, Json(result))
}

/// POST /api/zones/:id/vehicle-count - AI 计数后更新占用
pub async fn vehicle_count(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CountVehiclesInput>,
) -> AppResult<Json<VehicleCountResult>> {
    payload.validate()?;

    // 先确认区域存在, 避免无意义的模型调用
    if state.zones.get_zone(&id).is_none() {
        return Err(AppError::zone_not_found(id));
    }

    let output = state.flows.count_vehicles(&payload).await?;
    let zone = state
        .zones
        .try_set_occupancy(&id, i64::from(output.vehicle_count))?;

    Ok(Json(VehicleCountResult {
        vehicle_count: output.vehicle_count,
        success: true,
        zone: Some(zone),
    }))
}
