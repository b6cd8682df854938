// Domain entities
pub mod item;
pub mod runtime_config;

pub use item::*;
pub use runtime_config::*;
