// src/main.rs

use std::sync::Arc;

use product_catalog_api::infra::{config, logging};
use product_catalog_api::storage::{self, ProductStore, UnavailableStore};
use product_catalog_api::transport;
use product_catalog_api::ProductService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Store Initialization ---
    // A failed connect is logged and the server still starts; storage-backed routes then
    // answer 500 and /health reports 503.
    tracing::info!(kind = ?config::store_kind(), "connecting to product store");
    let store: Arc<dyn ProductStore> = match storage::connect().await {
        Ok(store) => {
            tracing::info!("product store ready");
            store
        }
        Err(e) => {
            tracing::error!(error = %e, "could not connect to the product store; starting degraded");
            Arc::new(UnavailableStore::new(e.to_string()))
        }
    };

    let app_state = transport::http::AppState::new(ProductService::new(store));

    // --- API Server Initialization ---
    let app = transport::http::build_app(app_state);
    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("API server listening on http://{}", listener.local_addr()?);
    tracing::info!("Swagger UI available at /docs");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("graceful shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received (Ctrl+C)");
}
