use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use rencar_backend::config::database::DatabaseConfig;
use rencar_backend::config::environment::EnvironmentConfig;
use rencar_backend::state::AppState;
use rencar_backend::{build_app, MIGRATOR};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 RenCar - Marketplace de alquiler de coches");
    info!("=============================================");

    // Inicializar base de datos
    let pool = match DatabaseConfig::default().create_pool().await {
        Ok(pool) => pool,
        Err(err) => {
            error!("❌ Error conectando a la base de datos: {}", err);
            return Err(anyhow::anyhow!("Error de base de datos: {}", err));
        }
    };

    MIGRATOR.run(&pool).await?;
    info!("✅ Migraciones aplicadas");

    let config = EnvironmentConfig::default();
    let addr: SocketAddr = config.server_url().parse()?;

    let app = build_app(AppState::new(pool, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   POST /api/auth/register - Registro de cuenta");
    info!("   POST /api/auth/login - Login");
    info!("   GET  /api/cars - Coches disponibles (público)");
    info!("   POST /api/cars - Publicar coche (host)");
    info!("   GET  /api/cars/host/mine - Coches propios (host)");
    info!("   DELETE /api/cars/:id - Borrar coche (host propietario)");
    info!("   POST /api/bookings/:car_id - Crear reserva (customer)");
    info!("   GET  /api/bookings/mine - Mis reservas (customer)");
    info!("   GET  /api/bookings/host - Reservas de mis coches (host)");
    info!("   POST /api/bookings/cancel/:id - Cancelar reserva");
    info!("   GET  /api/host/dashboard - Dashboard de host");
    info!("   POST /api/contact - Mensaje de contacto (público)");
    info!("   GET  /api/admin/* - Panel de administración (admin)");

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
