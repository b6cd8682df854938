use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::{info, warn};

use catalog_domain::RuntimeConfig;

use super::validation::validate_image_name;

const DEFAULT_CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub items_path: String,
    pub images_dir: String,
    pub default_image: String,
    pub front_url: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:9000".to_string(),
            items_path: "./items.json".to_string(),
            images_dir: "./images".to_string(),
            default_image: "default.jpg".to_string(),
            front_url: None,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    /// Loads from `path`, else `CATALOG_CONFIG`, else `./config.toml`.
    /// A missing file falls back to defaults.
    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        let path = path
            .or_else(|| env::var("CATALOG_CONFIG").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        let base_dir = path.parent();
        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            info!("loaded config from {}", path.display());
            Self::from_toml(&content)?
        } else {
            warn!("{} not found, using defaults", path.display());
            AppConfig::default()
        };
        config.apply_overrides(|key| env::var(key).ok());
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("failed to parse config")
    }

    pub fn normalize(&mut self) {
        if let Some(front_url) = &self.front_url {
            let trimmed = front_url.trim();
            self.front_url = if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            };
        }
        self.default_image = self.default_image.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.items_path = resolve_path(base, &self.items_path);
        self.images_dir = resolve_path(base, &self.images_dir);
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.items_path.trim().is_empty() {
            return Err(anyhow!("items_path must not be empty"));
        }
        if self.images_dir.trim().is_empty() {
            return Err(anyhow!("images_dir must not be empty"));
        }
        validate_image_name(&self.default_image)
            .map_err(|err| anyhow!("invalid default_image: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            items_path: self.items_path.clone(),
            images_dir: self.images_dir.clone(),
            default_image: self.default_image.clone(),
            front_url: self.front_url.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("CATALOG_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("CATALOG_ITEMS_PATH") {
            self.items_path = value;
        }
        if let Some(value) = lookup("CATALOG_IMAGES_DIR") {
            self.images_dir = value;
        }
        if let Some(value) = lookup("CATALOG_DEFAULT_IMAGE") {
            self.default_image = value;
        }
        if let Some(value) = lookup("CATALOG_FRONT_URL").or_else(|| lookup("FRONT_URL")) {
            self.front_url = Some(value);
        }
        if let Some(value) = lookup("CATALOG_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("CATALOG_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        config.validate().expect("defaults validate");
        assert_eq!(config.items_path, "./items.json");
        assert_eq!(config.default_image, "default.jpg");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml("items_path = \"data/catalog.json\"\n").expect("parse");
        assert_eq!(config.items_path, "data/catalog.json");
        assert_eq!(config.images_dir, "./images");
        assert_eq!(config.bind_addr, "127.0.0.1:9000");
    }

    #[test]
    fn overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("CATALOG_ITEMS_PATH", "/srv/items.json"),
            ("FRONT_URL", "http://localhost:3000"),
            ("CATALOG_MAX_BODY_BYTES", "not-a-number"),
            ("CATALOG_REQUEST_TIMEOUT_SECONDS", "30"),
        ]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));

        assert_eq!(config.items_path, "/srv/items.json");
        assert_eq!(config.front_url.as_deref(), Some("http://localhost:3000"));
        assert_eq!(config.max_body_bytes, 8 * 1024 * 1024);
        assert_eq!(config.request_timeout_seconds, 30);
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let mut config = AppConfig {
            items_path: "items.json".to_string(),
            images_dir: "/var/lib/catalog/images".to_string(),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/etc/catalog")));
        assert_eq!(
            Path::new(&config.items_path),
            Path::new("/etc/catalog/items.json")
        );
        assert_eq!(config.images_dir, "/var/lib/catalog/images");
    }

    #[test]
    fn blank_front_url_normalizes_to_none() {
        let mut config = AppConfig {
            front_url: Some("   ".to_string()),
            ..AppConfig::default()
        };
        config.normalize();
        assert!(config.front_url.is_none());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let bad_addr = AppConfig {
            bind_addr: "nowhere".to_string(),
            ..AppConfig::default()
        };
        assert!(bad_addr.validate().is_err());

        let empty_items = AppConfig {
            items_path: " ".to_string(),
            ..AppConfig::default()
        };
        assert!(empty_items.validate().is_err());

        let zero_body = AppConfig {
            max_body_bytes: 0,
            ..AppConfig::default()
        };
        assert!(zero_body.validate().is_err());

        let bad_default = AppConfig {
            default_image: "../default.jpg".to_string(),
            ..AppConfig::default()
        };
        assert!(bad_default.validate().is_err());
    }

    #[tokio::test]
    async fn load_reads_file_and_resolves_paths() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "bind_addr = \"127.0.0.1:9100\"\nitems_path = \"items.json\"\nimages_dir = \"images\"\n",
        )
        .expect("seed");

        let config = AppConfig::load(Some(path)).await.expect("load");
        assert_eq!(config.bind_addr, "127.0.0.1:9100");
        assert_eq!(
            Path::new(&config.items_path),
            dir.path().join("items.json")
        );
        assert_eq!(Path::new(&config.images_dir), dir.path().join("images"));
    }

    #[tokio::test]
    async fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "bind_addr = [").expect("seed");
        assert!(AppConfig::load(Some(path)).await.is_err());
    }
}
