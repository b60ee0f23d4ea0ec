pub mod auth_routes;
pub mod bill_routes;
pub mod driver_routes;
pub mod trip_routes;

use axum::{
    routing::get,
    Json, Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::{cors_middleware, cors_middleware_with_origins};
use crate::state::AppState;

/// Armar el router completo de la aplicación con sus capas
pub fn create_app_router(state: AppState) -> Router {
    // Sin CORS_ORIGINS configurado se permite cualquier origen (desarrollo)
    let cors = if state.config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(state.config.cors_origins.clone())
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest("/api/drivers", driver_routes::create_driver_router())
        .nest("/api/trips", trip_routes::create_trip_router())
        .nest("/api/bills", bill_routes::create_bill_router())
        .route("/api/all-drivers", get(driver_routes::list_all_drivers))
        .route("/api/all-bills", get(bill_routes::list_all_bills))
        .merge(auth_routes::create_auth_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Ride dispatch API funcionando correctamente",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
