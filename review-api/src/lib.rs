//! Review API - HTTP surface of the company review service
//!
//! Routes:
//! - `GET|POST /api/v1/reviews/`
//! - `GET /api/v1/reviews/{id}/`
//! - `GET /docs/`

use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::{
    net::TcpListener,
    signal::{self, ctrl_c},
};
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod auth;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod origin;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, SharedState};

pub const COLLECTION_PATH: &str = "/api/v1/reviews/";
pub const ITEM_PATH: &str = "/api/v1/reviews/{id}/";
pub const DOCS_PATH: &str = "/docs/";

/// Build the application router
pub fn router(state: SharedState) -> Router {
    Router::new()
        .route(
            COLLECTION_PATH,
            get(handlers::list_reviews)
                .post(handlers::create_review)
                .fallback(handlers::collection_method_not_allowed),
        )
        .route(
            ITEM_PATH,
            get(handlers::retrieve_review).fallback(handlers::item_method_not_allowed),
        )
        .route(DOCS_PATH, get(docs::api_docs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the API on `listener` until Ctrl+C or SIGTERM
pub async fn serve(listener: TcpListener, state: SharedState) -> std::io::Result<()> {
    let app = router(state);

    info!(address = %listener.local_addr()?, "Server running");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        use signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::warn!("Failed to install terminate handler: {}", e);
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
}
