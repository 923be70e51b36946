use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Meal plan produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPlanResult {
    #[schema(example = "1100 calories/day")]
    pub caloric_intake: String,
    pub meal_plan: DailyMeals,
    pub nutrition_balance: NutritionBalance,
    pub warnings: String,
    /// Suggested recipes, in the order the model listed them.
    pub ingredients: Vec<Recipe>,
    pub feeding_guidelines: FeedingGuidelines,
    pub supplements: String,
    pub foods_to_avoid: String,
    pub transition_guidelines: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyMeals {
    pub breakfast: String,
    pub lunch: String,
    pub dinner: String,
    pub snacks: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionBalance {
    pub protein: String,
    pub fat: String,
    pub carbs: String,
    pub fiber: String,
    pub moisture: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub recipe_name: String,
    pub ingredients: Vec<String>,
    pub preparation: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FeedingGuidelines {
    pub frequency: String,
    pub portion_control: String,
    pub water_intake: String,
    pub feeding_tips: String,
}

impl MealPlanResult {
    /// Dotted paths of the text fields the model left blank.
    pub fn empty_fields(&self) -> Vec<String> {
        let mut fields: Vec<(String, &String)> = vec![
            ("caloric_intake".to_string(), &self.caloric_intake),
            ("meal_plan.breakfast".to_string(), &self.meal_plan.breakfast),
            ("meal_plan.lunch".to_string(), &self.meal_plan.lunch),
            ("meal_plan.dinner".to_string(), &self.meal_plan.dinner),
            ("meal_plan.snacks".to_string(), &self.meal_plan.snacks),
            ("nutrition_balance.protein".to_string(), &self.nutrition_balance.protein),
            ("nutrition_balance.fat".to_string(), &self.nutrition_balance.fat),
            ("nutrition_balance.carbs".to_string(), &self.nutrition_balance.carbs),
            ("nutrition_balance.fiber".to_string(), &self.nutrition_balance.fiber),
            ("nutrition_balance.moisture".to_string(), &self.nutrition_balance.moisture),
            ("warnings".to_string(), &self.warnings),
            ("feeding_guidelines.frequency".to_string(), &self.feeding_guidelines.frequency),
            (
                "feeding_guidelines.portion_control".to_string(),
                &self.feeding_guidelines.portion_control,
            ),
            (
                "feeding_guidelines.water_intake".to_string(),
                &self.feeding_guidelines.water_intake,
            ),
            (
                "feeding_guidelines.feeding_tips".to_string(),
                &self.feeding_guidelines.feeding_tips,
            ),
            ("supplements".to_string(), &self.supplements),
            ("foods_to_avoid".to_string(), &self.foods_to_avoid),
            ("transition_guidelines".to_string(), &self.transition_guidelines),
        ];

        for (index, recipe) in self.ingredients.iter().enumerate() {
            fields.push((format!("ingredients[{index}].recipe_name"), &recipe.recipe_name));
            fields.push((format!("ingredients[{index}].description"), &recipe.description));
        }

        let mut empty: Vec<String> = fields
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(path, _)| path)
            .collect();

        if self.ingredients.is_empty() {
            empty.push("ingredients".to_string());
        }

        empty
    }
}
