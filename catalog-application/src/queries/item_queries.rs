use catalog_domain::{ItemEntry, ItemId};

use crate::error::store_failure;
use crate::{AppError, AppState};

pub async fn list_items(state: &AppState) -> Result<Vec<ItemEntry>, AppError> {
    let items = state
        .item_repo
        .list()
        .await
        .map_err(|err| store_failure(state, err))?;
    Ok(ItemEntry::enumerate(items))
}

pub async fn get_item(state: &AppState, id: ItemId) -> Result<ItemEntry, AppError> {
    let item = state
        .item_repo
        .select(id)
        .await
        .map_err(|err| store_failure(state, err))?;
    Ok(ItemEntry { id, item })
}

/// Items whose name or category contains `keyword`, keeping their positional ids.
pub async fn search_items(state: &AppState, keyword: &str) -> Result<Vec<ItemEntry>, AppError> {
    let entries = list_items(state).await?;
    Ok(entries
        .into_iter()
        .filter(|entry| entry.item.matches_keyword(keyword))
        .collect())
}
