use std::path::Path;

use tracing::warn;

use catalog_domain::check_image_name;

use crate::error::store_failure;
use crate::{AppError, AppState};

/// Reads an image from the images directory, falling back to the default image.
pub async fn load_image(state: &AppState, name: &str) -> Result<Vec<u8>, AppError> {
    check_image_name(name).map_err(|reason| AppError::BadRequest(reason.to_string()))?;

    let images_dir = Path::new(&state.config.images_dir);
    let loaded = state
        .image_store
        .load_image(&images_dir.join(name))
        .await
        .map_err(|err| store_failure(state, err))?;
    if let Some(bytes) = loaded {
        return Ok(bytes);
    }

    warn!("image {} not found, serving {}", name, state.config.default_image);
    state
        .image_store
        .load_image(&images_dir.join(&state.config.default_image))
        .await
        .map_err(|err| store_failure(state, err))?
        .ok_or_else(|| AppError::NotFound("image not found".to_string()))
}
