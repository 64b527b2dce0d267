use std::net::SocketAddr;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use event_board::client::HttpBackend;
use event_board::config::Config;
use event_board::controller::Controller;
use event_board::routes::{create_routes, AppState};

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();

    let backend = HttpBackend::new(&config.backend_url).expect("BACKEND_URL must be a valid URL");
    tracing::info!("Using backend at {}", backend.base_url());

    let controller = Controller::new(backend, config.utc_offset());
    let app = create_routes(AppState::new(controller));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Event board running at http://{}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
