use serde::Deserialize;

/// A new item as received from a client, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub image: Option<ImageUpload>,
}

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub keyword: Option<String>,
}
