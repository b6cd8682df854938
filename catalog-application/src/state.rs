use std::sync::Arc;

use catalog_domain::ports::{ImageStore, ItemRepository};
use catalog_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub item_repo: Arc<dyn ItemRepository>,
    pub image_store: Arc<dyn ImageStore>,
    pub metrics: Arc<Metrics>,
}
