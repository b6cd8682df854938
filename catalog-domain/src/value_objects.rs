// Domain value objects
pub mod identifiers;
pub mod image_name;

pub use identifiers::*;
pub use image_name::*;
