use std::path::Path;

use async_trait::async_trait;

use crate::entities::Item;
use crate::errors::StoreError;
use crate::value_objects::ItemId;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Appends the item and returns its positional id.
    async fn insert(&self, item: &Item) -> Result<ItemId, StoreError>;
    async fn list(&self) -> Result<Vec<Item>, StoreError>;
    async fn select(&self, id: ItemId) -> Result<Item, StoreError>;
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn store_image(&self, file_name: &Path, image: &[u8]) -> Result<(), StoreError>;
    /// Returns `Ok(None)` when the file does not exist.
    async fn load_image(&self, file_name: &Path) -> Result<Option<Vec<u8>>, StoreError>;
}
