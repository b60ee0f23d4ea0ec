use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::bill_controller::BillController;
use crate::dto::bill_dto::{CreateBillRequest, CreateBillResponse};
use crate::models::bill::Bill;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_bill_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_bill))
        .route("/get/:driver_email", get(get_bills))
}

async fn create_bill(
    State(state): State<AppState>,
    Json(request): Json<CreateBillRequest>,
) -> Result<(StatusCode, Json<CreateBillResponse>), AppError> {
    let controller = BillController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_bills(
    State(state): State<AppState>,
    Path(driver_email): Path<String>,
) -> Result<Json<Vec<Bill>>, AppError> {
    let controller = BillController::new(state.pool.clone());
    let response = controller.list_by_driver(&driver_email).await?;
    Ok(Json(response))
}

// Listado completo para el panel de administración; se monta fuera del
// nest en /api/all-bills
pub async fn list_all_bills(State(state): State<AppState>) -> Result<Json<Vec<Bill>>, AppError> {
    let controller = BillController::new(state.pool.clone());
    let response = controller.list_all().await?;
    Ok(Json(response))
}
