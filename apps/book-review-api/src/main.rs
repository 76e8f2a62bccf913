use book_review_api::{Config, Environment, create_app, telemetry};
use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load environment (.env) if present
    dotenv().ok();

    telemetry::init(&Environment::from_env())?;

    let config = Config::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!(
        "Starting Book Review API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    if config.jwt_secret.is_empty() {
        if config.environment.is_production() {
            warn!("JWT_SECRET is empty in production");
        } else {
            info!("JWT_SECRET is empty");
        }
    }

    let app = create_app(&config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server starting at port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
