use crate::collector::Collector;
use crate::exposition::{CONTENT_TYPE, render};
use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

pub const METRICS_PATH: &str = "/metrics";

pub fn create_router(collector: Arc<Collector>) -> Router {
    Router::new().route(METRICS_PATH, get(metrics_handler)).with_state(collector)
}

/// Every request triggers a fresh collection. Dropping the request cancels the in-flight hub request with it.
#[instrument(skip_all)]
async fn metrics_handler(State(collector): State<Arc<Collector>>) -> Response {
    let observations = collector.collect().await;

    let constant_labels = vec![("hubitat_address", collector.hubitat_address().to_owned())];
    match render(collector.registry(), &observations, constant_labels) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
        Err(e) => {
            error!("❌ Unable to encode metrics: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Serves the metrics endpoint until Ctrl-C is received.
pub async fn serve(listen_address: &str, collector: Arc<Collector>) -> io::Result<()> {
    let listener = TcpListener::bind(listen_address).await?;
    info!("✅  Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(collector))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("❌ Unable to listen for the shutdown signal: {}", e);
            }
            info!("🛑 Shutting down");
        })
        .await
}
