pub mod get_meal_guidelines;
