use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use catalog_application::{AppState, Metrics};
use catalog_domain::RuntimeConfig;
use catalog_infrastructure::{AppConfig, ImageFileStore, JsonItemRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<PathBuf>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        Ok(Self::from_runtime_config(config.to_runtime_config()))
    }

    pub fn from_runtime_config(config: RuntimeConfig) -> Self {
        info!(
            "items stored in {}, images in {}",
            config.items_path, config.images_dir
        );
        let item_repo = Arc::new(JsonItemRepository::new(&config.items_path));

        let state = AppState {
            config,
            item_repo,
            image_store: Arc::new(ImageFileStore::new()),
            metrics: Arc::new(Metrics::default()),
        };

        Self { state }
    }
}
