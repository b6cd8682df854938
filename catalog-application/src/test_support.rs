use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use catalog_domain::{
    ImageStore, Item, ItemDocument, ItemId, ItemRepository, RuntimeConfig, StoreError,
};

use crate::{AppState, Metrics};

#[derive(Default)]
pub struct MemoryItems {
    pub document: Mutex<ItemDocument>,
    pub fail_writes: bool,
}

#[async_trait]
impl ItemRepository for MemoryItems {
    async fn insert(&self, item: &Item) -> Result<ItemId, StoreError> {
        if self.fail_writes {
            return Err(StoreError::io(
                "failed to write file",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ));
        }
        Ok(self.document.lock().await.push(item.clone()))
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.document.lock().await.items.clone())
    }

    async fn select(&self, id: ItemId) -> Result<Item, StoreError> {
        let document = self.document.lock().await;
        id.index()
            .and_then(|index| document.items.get(index))
            .cloned()
            .ok_or(StoreError::NotFound)
    }
}

#[derive(Default)]
pub struct MemoryImages {
    pub files: Mutex<HashMap<PathBuf, Vec<u8>>>,
}

#[async_trait]
impl ImageStore for MemoryImages {
    async fn store_image(&self, file_name: &Path, image: &[u8]) -> Result<(), StoreError> {
        self.files
            .lock()
            .await
            .insert(file_name.to_path_buf(), image.to_vec());
        Ok(())
    }

    async fn load_image(&self, file_name: &Path) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.files.lock().await.get(file_name).cloned())
    }
}

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        items_path: "items.json".to_string(),
        images_dir: "images".to_string(),
        default_image: "default.jpg".to_string(),
        front_url: None,
        max_body_bytes: 1024 * 1024,
        request_timeout_seconds: 5,
    }
}

pub fn state_with(items: Arc<MemoryItems>, images: Arc<MemoryImages>) -> AppState {
    AppState {
        config: runtime_config(),
        item_repo: items,
        image_store: images,
        metrics: Arc::new(Metrics::default()),
    }
}

pub fn memory_state() -> (AppState, Arc<MemoryItems>, Arc<MemoryImages>) {
    let items = Arc::new(MemoryItems::default());
    let images = Arc::new(MemoryImages::default());
    (state_with(items.clone(), images.clone()), items, images)
}
