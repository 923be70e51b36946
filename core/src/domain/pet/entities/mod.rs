pub mod errors;
pub mod pet;

pub use errors::*;
pub use pet::*;
