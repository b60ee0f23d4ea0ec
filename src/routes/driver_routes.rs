use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::driver_controller::DriverController;
use crate::dto::driver_dto::{
    CheckExistsRequest, CheckExistsResponse, DriverStatusResponse, RegisterDriverRequest,
    RegisterDriverResponse,
};
use crate::dto::MessageResponse;
use crate::models::driver::{Driver, DriverSummary};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_driver))
        .route("/check-exists", post(check_exists))
        .route("/", get(list_drivers))
        .route("/:id", get(get_driver))
        .route("/:id", put(update_driver))
        .route("/status/:email", get(get_driver_status))
}

async fn register_driver(
    State(state): State<AppState>,
    Json(request): Json<RegisterDriverRequest>,
) -> Result<(StatusCode, Json<RegisterDriverResponse>), AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn check_exists(
    State(state): State<AppState>,
    Json(request): Json<CheckExistsRequest>,
) -> Result<Json<CheckExistsResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.check_exists(request).await?;
    Ok(Json(response))
}

async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Driver>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(fields): Json<serde_json::Map<String, serde_json::Value>>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    controller.update(id, fields).await?;
    Ok(Json(MessageResponse::new("Driver updated successfully")))
}

async fn get_driver_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<DriverStatusResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.status_by_email(&email).await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverSummary>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

// Listado completo para el panel de administración; se monta fuera del
// nest en /api/all-drivers
pub async fn list_all_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}
