use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use catalog_application::commands::item_commands;
use catalog_application::dtos::{ImageUpload, NewItem, SearchQuery};
use catalog_application::queries::item_queries;
use catalog_application::AppState;
use catalog_domain::{ItemEntry, ItemId};

use crate::error::HttpError;

#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub image_name: String,
}

impl From<ItemEntry> for ItemView {
    fn from(entry: ItemEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.item.name,
            category: entry.item.category,
            image_name: entry.item.image,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemsResponse {
    pub items: Vec<ItemView>,
}

impl ItemsResponse {
    fn from_entries(entries: Vec<ItemEntry>) -> Self {
        Self {
            items: entries.into_iter().map(ItemView::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddItemResponse {
    pub message: String,
    pub id: ItemId,
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<ItemsResponse>, HttpError> {
    let entries = item_queries::list_items(&state).await?;
    Ok(Json(ItemsResponse::from_entries(entries)))
}

pub async fn get_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<ItemView>, HttpError> {
    let id = raw_id
        .trim()
        .parse::<i64>()
        .map(ItemId)
        .map_err(|_| HttpError::BadRequest(format!("invalid item id '{}'", raw_id)))?;
    let entry = item_queries::get_item(&state, id).await?;
    Ok(Json(ItemView::from(entry)))
}

pub async fn search_items(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ItemsResponse>, HttpError> {
    let keyword = query.keyword.unwrap_or_default();
    let entries = item_queries::search_items(&state, &keyword).await?;
    Ok(Json(ItemsResponse::from_entries(entries)))
}

pub async fn add_item(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AddItemResponse>, HttpError> {
    let payload = read_new_item(multipart).await?;
    let entry = item_commands::add_item(&state, payload).await?;
    info!("item received: {}", entry.item.name);
    Ok(Json(AddItemResponse {
        message: format!("item received: {}", entry.item.name),
        id: entry.id,
    }))
}

async fn read_new_item(mut multipart: Multipart) -> Result<NewItem, HttpError> {
    let mut payload = NewItem::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| HttpError::BadRequest(err.to_string()))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "name" => payload.name = read_text(field).await?,
            "category" => payload.category = read_text(field).await?,
            "image" => {
                let file_name = field.file_name().map(ToString::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| HttpError::BadRequest(err.to_string()))?;
                payload.image = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }
    Ok(payload)
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, HttpError> {
    field
        .text()
        .await
        .map_err(|err| HttpError::BadRequest(err.to_string()))
}
