use super::{extract::DialogInput, types::PredictionResponse};
use crate::predictor::Predictor;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

pub const INTERNAL_SERVER_ERROR_BODY: &str = "Internal Server Error";

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn Predictor>,
}

pub async fn predict(
    State(state): State<AppState>,
    DialogInput(dialog): DialogInput,
) -> Result<Json<PredictionResponse>, (StatusCode, &'static str)> {
    info!(
        "Received prediction request with {} utterances",
        dialog.utterances.len()
    );

    match state.predictor.predict_contradiction(&dialog).await {
        Ok(prediction) => Ok(Json(PredictionResponse { prediction })),
        Err(e) => {
            error!("Contradiction prediction failed: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_BODY))
        }
    }
}
