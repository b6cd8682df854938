pub mod image_queries;
pub mod item_queries;
