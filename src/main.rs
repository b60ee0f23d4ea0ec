use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use ride_dispatch::config::environment::EnvironmentConfig;
use ride_dispatch::database::DatabaseConnection;
use ride_dispatch::routes::create_app_router;
use ride_dispatch::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚕 Ride Dispatch - API de despacho de viajes");
    info!("============================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();

    // Crear router de la API
    let config = EnvironmentConfig::default();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let app_state = AppState::new(pool, config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /api/drivers/register - Registrar conductor");
    info!("   POST /api/drivers/check-exists - Pre-chequeo de unicidad");
    info!("   POST /login - Login conductor");
    info!("   GET  /api/drivers/:id - Obtener conductor");
    info!("   PUT  /api/drivers/:id - Actualizar conductor");
    info!("   GET  /api/drivers/status/:email - Estado del conductor");
    info!("🚗 Endpoints - Trips:");
    info!("   POST /api/trips/add-trips - Crear viaje");
    info!("   GET  /api/trips - Listar viajes");
    info!("   PUT  /api/trips/:id/accept - Accept-intent de conductor");
    info!("   PUT  /api/trips/assign-driver - Asignación administrativa");
    info!("   PUT  /api/trips/:id/start - Iniciar viaje");
    info!("   PUT  /api/trips/:id/complete - Completar viaje");
    info!("   PUT  /api/trips/update-field - Parche de campo permitido");
    info!("   GET  /api/trips/accepted/:driverEmail - Viajes aceptados");
    info!("   GET  /api/trips/wip/:driverEmail - Viajes en curso");
    info!("💵 Endpoints - Bills:");
    info!("   POST /api/bills - Guardar factura");
    info!("   GET  /api/bills/get/:driverEmail - Facturas del conductor");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
