// Image file name rules shared by upload, download and config

pub const IMAGE_EXTENSION: &str = "jpg";

/// Checks that `name` is a bare `.jpg` file name that cannot escape the images directory.
pub fn check_image_name(name: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("image name is empty");
    }
    if name.contains('/') || name.contains('\\') || name.contains("..") {
        return Err("image name must not contain path components");
    }
    if !has_jpeg_extension(name) {
        return Err("image path does not end with .jpg");
    }
    Ok(())
}

pub fn has_jpeg_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_jpeg_names() {
        assert!(check_image_name("default.jpg").is_ok());
        assert!(check_image_name("PHOTO.JPEG").is_ok());
    }

    #[test]
    fn rejects_traversal_and_other_extensions() {
        assert!(check_image_name("").is_err());
        assert!(check_image_name("../secret.jpg").is_err());
        assert!(check_image_name("nested/photo.jpg").is_err());
        assert!(check_image_name("photo.png").is_err());
    }
}
