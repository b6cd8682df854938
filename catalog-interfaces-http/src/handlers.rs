pub mod image_handlers;
pub mod item_handlers;
pub mod ops_handlers;

pub use image_handlers::*;
pub use item_handlers::*;
pub use ops_handlers::*;
