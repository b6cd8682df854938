use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use catalog_domain::{ImageStore, StoreError};

use crate::utils::write_file;

/// Writes raw image bytes to whatever path the caller names. No format checks.
pub struct ImageFileStore;

impl ImageFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageStore for ImageFileStore {
    async fn store_image(&self, file_name: &Path, image: &[u8]) -> Result<(), StoreError> {
        write_file(file_name, image)
            .await
            .map_err(|err| StoreError::io("failed to write image file", err))?;
        info!("stored {} bytes at {}", image.len(), file_name.display());
        Ok(())
    }

    async fn load_image(&self, file_name: &Path) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(file_name).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::io("failed to read image file", err)),
        }
    }
}
