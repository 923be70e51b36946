//! Canned model replies shared by the meal plan tests.

pub const PLAN_JSON: &str = r#"{
    "caloric_intake": "1100 calories/day",
    "meal_plan": {
        "breakfast": "8:00 AM - 150g chicken and rice",
        "lunch": "12:00 PM - 100g turkey and sweet potato",
        "dinner": "6:00 PM - 150g beef and carrots",
        "snacks": "No snacks recommended"
    },
    "nutrition_balance": {
        "protein": "30%",
        "fat": "15%",
        "carbs": "45%",
        "fiber": "5%",
        "moisture": "5%"
    },
    "warnings": "No specific warnings",
    "ingredients": [
        {
            "recipe_name": "Chicken Rice Bowl",
            "ingredients": ["chicken breast", "brown rice"],
            "preparation": ["Boil the chicken", "Cook the rice"],
            "description": "A gentle bowl. Easy to digest."
        }
    ],
    "feeding_guidelines": {
        "frequency": "Twice daily",
        "portion_control": "Weigh every meal",
        "water_intake": "1.5 liters per day",
        "feeding_tips": "Feed at the same times"
    },
    "supplements": "No supplements required",
    "foods_to_avoid": "Grapes, chocolate, onions",
    "transition_guidelines": "Mix over 7 days"
}"#;
