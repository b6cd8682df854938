use axum::extract::{Path, State};
use axum::http::{header, HeaderValue};
use axum::response::IntoResponse;

use catalog_application::queries::image_queries;
use catalog_application::AppState;

use crate::error::HttpError;

pub async fn get_image(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let bytes = image_queries::load_image(&state, &name).await?;
    Ok((
        [(header::CONTENT_TYPE, HeaderValue::from_static("image/jpeg"))],
        bytes,
    ))
}
