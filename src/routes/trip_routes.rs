use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::{
    AcceptTripRequest, AssignDriverRequest, CompleteTripRequest, CompleteTripResponse,
    CreateTripRequest, CreateTripResponse, TripStatusResponse, UpdateFieldRequest,
};
use crate::dto::MessageResponse;
use crate::models::trip::Trip;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_trip_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips))
        .route("/add-trips", post(create_trip))
        .route("/assign-driver", put(assign_driver))
        .route("/update-field", put(update_field))
        .route("/accepted/:driver_email", get(get_accepted_trips))
        .route("/wip/:driver_email", get(get_wip_trips))
        .route("/status/:email", get(get_trip_status))
        .route("/:id", get(get_trip))
        .route("/:id/accept", put(accept_trip))
        .route("/:id/start", put(start_trip))
        .route("/:id/complete", put(complete_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    Json(request): Json<CreateTripRequest>,
) -> Result<(StatusCode, Json<CreateTripResponse>), AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_trips(State(state): State<AppState>) -> Result<Json<Vec<Trip>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Trip>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn accept_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<AcceptTripRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.accept(id, request).await?;
    Ok(Json(MessageResponse::new("Trip accepted successfully")))
}

async fn assign_driver(
    State(state): State<AppState>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.assign_driver(request).await?;
    Ok(Json(MessageResponse::new("Driver assigned successfully")))
}

async fn start_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.start(id).await?;
    Ok(Json(MessageResponse::new("Trip started successfully")))
}

async fn complete_trip(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<CompleteTripRequest>,
) -> Result<Json<CompleteTripResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.complete(id, request).await?;
    Ok(Json(response))
}

async fn update_field(
    State(state): State<AppState>,
    Json(request): Json<UpdateFieldRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    controller.update_field(request).await?;
    Ok(Json(MessageResponse::new("Trip updated successfully")))
}

async fn get_accepted_trips(
    State(state): State<AppState>,
    Path(driver_email): Path<String>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.accepted_by_driver(&driver_email).await?;
    Ok(Json(response))
}

async fn get_wip_trips(
    State(state): State<AppState>,
    Path(driver_email): Path<String>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.wip_by_driver(&driver_email).await?;
    Ok(Json(response))
}

async fn get_trip_status(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<TripStatusResponse>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.status_by_driver(&email).await?;
    Ok(Json(response))
}
