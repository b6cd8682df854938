use anyhow::{anyhow, Result};

use catalog_domain::check_image_name;

pub fn validate_image_name(value: &str) -> Result<()> {
    check_image_name(value).map_err(|reason| anyhow!("{}: '{}'", reason, value))
}
