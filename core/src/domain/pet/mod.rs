pub mod breeds;
pub mod entities;
pub mod validation;
pub mod value_objects;

pub use entities::*;
pub use value_objects::*;
