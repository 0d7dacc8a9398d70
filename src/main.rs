use anyhow::Result;
use axum::Router;
use dotenvy::dotenv;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use travel_booking::config::environment::EnvironmentConfig;
use travel_booking::database::connection::{create_pool, run_migrations};
use travel_booking::middleware::cors::cors_middleware;
use travel_booking::repositories::travel_repository::PgTravelStore;
use travel_booking::routes;
use travel_booking::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("✈️  Travel Booking API");
    info!("======================");

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(e);
        }
    };

    run_migrations(&pool).await?;

    // Crear router de la API
    let config = EnvironmentConfig::default();
    let store = Arc::new(PgTravelStore::new(pool));
    let app_state = AppState::new(store, config.clone());

    let app = Router::new()
        .nest("/api/travels", routes::travel_routes::create_travel_router())
        .layer(cors_middleware())
        .with_state(app_state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST   /api/travels - Crear registro de viaje");
    info!("   GET    /api/travels - Listar registros");
    info!("   GET    /api/travels/:id - Obtener registro");
    info!("   PUT    /api/travels/:id - Actualizar registro");
    info!("   DELETE /api/travels/:id - Eliminar registro");
    info!("🔎 Endpoints de búsqueda:");
    info!("   GET    /api/travels/search/destination/:destination - Por destino");
    info!("   GET    /api/travels/search/origin/:origin - Por origen");
    info!("   GET    /api/travels/search/type/:travel_type - Por tipo de viaje");
    info!("   GET    /api/travels/search/dates?startDate&endDate - Por rango de fechas");
    info!("   GET    /api/travels/search/price?minPrice&maxPrice - Por rango de precio");
    info!("   GET    /api/travels/search/currency/:currency - Por moneda");
    info!("   GET    /api/travels/search/passengers/:passengers - Por pasajeros");
    info!("   GET    /api/travels/search/:query - Búsqueda global");
    info!("📊 Endpoints de estadísticas:");
    info!("   GET    /api/travels/statistics/type - Conteo por tipo de viaje");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

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
