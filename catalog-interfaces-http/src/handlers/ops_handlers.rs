use axum::extract::State;
use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use catalog_application::AppState;

#[derive(Serialize)]
pub struct HelloResponse {
    message: &'static str,
}

pub async fn root() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello, world!",
    })
}

pub async fn metrics_prometheus(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        state.metrics.render_prometheus(),
    )
}
