// Runtime configuration carried in application state

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub items_path: String,
    pub images_dir: String,
    pub default_image: String,
    pub front_url: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}
