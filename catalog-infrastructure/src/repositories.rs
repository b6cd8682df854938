pub mod image_files;
pub mod json_items;

pub use image_files::*;
pub use json_items::*;
