use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::info;

use catalog_domain::{has_jpeg_extension, Item, ItemEntry, IMAGE_EXTENSION};

use crate::dtos::{ImageUpload, NewItem};
use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn add_item(state: &AppState, payload: NewItem) -> Result<ItemEntry, AppError> {
    let name = normalize_required_text(payload.name, "name")?;
    let category = normalize_required_text(payload.category, "category")?;

    let image = match payload.image {
        Some(upload) => store_upload(state, upload).await?,
        None => state.config.default_image.clone(),
    };

    let item = Item::new(name, category, image);
    let id = state
        .item_repo
        .insert(&item)
        .await
        .map_err(|err| store_failure(state, err))?;
    state.metrics.record_item_inserted();
    Ok(ItemEntry { id, item })
}

async fn store_upload(state: &AppState, upload: ImageUpload) -> Result<String, AppError> {
    if let Some(file_name) = upload.file_name.as_deref() {
        if !has_jpeg_extension(file_name) {
            return Err(AppError::BadRequest(format!(
                "image '{}' is not a .jpg file",
                file_name
            )));
        }
    }

    let image_name = hashed_image_name(&upload.bytes);
    let path = Path::new(&state.config.images_dir).join(&image_name);
    state
        .image_store
        .store_image(&path, &upload.bytes)
        .await
        .map_err(|err| store_failure(state, err))?;
    state.metrics.record_image_stored();
    info!("image stored as {}", image_name);
    Ok(image_name)
}

/// Content-addressed file name: lowercase hex SHA-256 of the bytes plus `.jpg`.
pub fn hashed_image_name(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2 + IMAGE_EXTENSION.len() + 1);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out.push('.');
    out.push_str(IMAGE_EXTENSION);
    out
}

fn normalize_required_text(value: String, field: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
