use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode},
};
use contradiction_gateway::{predictor::Predictor, server};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

pub fn create_test_app(predictor: impl Predictor + 'static) -> Router {
    server::router(Arc::new(predictor))
}

pub fn predict_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

/// Sends a JSON POST to `/predict` and returns the status with the raw body
pub async fn post_predict(app: &Router, body: &Value) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(predict_request(body.to_string()))
        .await
        .unwrap();
    into_parts(response).await
}

pub async fn into_parts(response: Response<Body>) -> (StatusCode, String) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
