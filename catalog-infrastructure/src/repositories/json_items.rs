use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use catalog_domain::{Item, ItemDocument, ItemId, ItemRepository, StoreError};

use crate::utils::write_file;

/// Item repository backed by a single pretty-printed JSON document.
///
/// Every insert rewrites the whole file. The async mutex serializes the
/// read-modify-write cycle for callers sharing this repository; separate
/// processes writing the same file are not coordinated.
pub struct JsonItemRepository {
    path: PathBuf,
    guard: Mutex<()>,
}

impl JsonItemRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<ItemDocument, StoreError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, treating as empty", self.path.display());
                return Ok(ItemDocument::default());
            }
            Err(err) => return Err(StoreError::io("failed to read file", err)),
        };
        decode_document(&content)
    }

    async fn write_document(&self, document: &ItemDocument) -> Result<(), StoreError> {
        let content = serde_json::to_vec_pretty(document)
            .map_err(|err| StoreError::serialization("failed to marshal JSON", err))?;
        write_file(&self.path, &content)
            .await
            .map_err(|err| StoreError::io("failed to write file", err))
    }
}

fn decode_document(content: &[u8]) -> Result<ItemDocument, StoreError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(ItemDocument::default());
    }
    serde_json::from_slice::<Option<ItemDocument>>(content)
        .map(Option::unwrap_or_default)
        .map_err(|err| StoreError::serialization("failed to unmarshal JSON", err))
}

#[async_trait]
impl ItemRepository for JsonItemRepository {
    async fn insert(&self, item: &Item) -> Result<ItemId, StoreError> {
        let _held = self.guard.lock().await;
        let mut document = self.read_document().await?;
        let id = document.push(item.clone());
        self.write_document(&document).await?;
        info!("item {} added as id {}", item.name, id);
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let _held = self.guard.lock().await;
        let document = self.read_document().await?;
        Ok(document.items)
    }

    async fn select(&self, id: ItemId) -> Result<Item, StoreError> {
        let Some(index) = id.index() else {
            return Err(StoreError::NotFound);
        };
        let items = self.list().await?;
        items.into_iter().nth(index).ok_or(StoreError::NotFound)
    }
}
