pub mod extract;
pub mod handlers;
mod types;

pub use types::*;

use crate::{config::Config, predictor::{self, Predictor}, Result};
use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::{any::Any, net::SocketAddr, sync::Arc};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

/// Builds the gateway router around the given predictor.
pub fn router(predictor: Arc<dyn Predictor>) -> Router {
    let app_state = handlers::AppState { predictor };

    Router::new()
        .route("/predict", post(handlers::predict))
        .with_state(app_state)
        .layer(DefaultBodyLimit::disable())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn panic_response(_panic: Box<dyn Any + Send + 'static>) -> Response {
    error!("Predictor panicked while handling request");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        handlers::INTERNAL_SERVER_ERROR_BODY,
    )
        .into_response()
}

pub async fn run(config: Config) -> Result<()> {
    let predictor = predictor::from_config(&config.predictor);
    let app = router(predictor);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
