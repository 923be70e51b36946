pub mod common;
pub mod meal_plan;
pub mod pet;
