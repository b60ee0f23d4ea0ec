use axum::{extract::State, routing::post, Json, Router};

use crate::controllers::driver_controller::DriverController;
use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = DriverController::new(state.pool.clone());
    let response = controller
        .login(request, &state.config.jwt_secret)
        .await?;
    Ok(Json(response))
}
