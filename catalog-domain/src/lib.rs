// Catalog Domain Layer

pub mod entities;
pub mod errors;
pub mod ports;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use ports::*;
pub use value_objects::*;
