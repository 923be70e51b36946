use pawplan_core::domain::{
    meal_plan::value_objects::{FoodJournalEntry, GenerateMealPlanInput},
    pet::value_objects::PetDetails,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Pet details plus optional feeding history. Missing fields take the
/// [`PetDetails`] defaults.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(default)]
pub struct GetMealGuidelinesRequest {
    #[schema(example = "Biscuit")]
    pub name: String,
    #[schema(example = "golden retriever")]
    pub breed: String,
    #[schema(example = "Female")]
    pub gender: String,
    #[schema(example = "Dog")]
    pub species: String,
    /// Years, as a number or numeric string.
    #[schema(value_type = f64, example = 3)]
    pub age: Value,
    /// Kilograms, as a number or numeric string.
    #[schema(value_type = f64, example = 25)]
    pub weight: Value,
    #[schema(example = "High")]
    pub activity_level: String,
    #[schema(example = "None")]
    pub health_concerns: String,
    #[validate(nested)]
    pub food_journal: Option<Vec<FoodJournalEntryRequest>>,
    /// Titles of recipes the owner already saved; the model is asked not to repeat them.
    pub existing_recipes: Option<Vec<String>>,
}

impl Default for GetMealGuidelinesRequest {
    fn default() -> Self {
        let pet = PetDetails::default();
        Self {
            name: pet.name,
            breed: pet.breed,
            gender: pet.gender,
            species: pet.species,
            age: pet.age,
            weight: pet.weight,
            activity_level: pet.activity_level,
            health_concerns: pet.health_concerns,
            food_journal: None,
            existing_recipes: None,
        }
    }
}

/// Entries are checked for presence only; any JSON value other than `null`
/// or an empty string is accepted and echoed into the prompt.
#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FoodJournalEntryRequest {
    #[validate(custom(function = "validate_present", message = "dateTime is required"))]
    #[schema(value_type = String, example = "2024-05-01T08:00:00Z")]
    pub date_time: Value,
    #[validate(custom(function = "validate_present", message = "description is required"))]
    #[schema(value_type = String, example = "Dry kibble")]
    pub description: Value,
    #[validate(custom(function = "validate_present", message = "quantity is required"))]
    #[schema(value_type = f64, example = 120)]
    pub quantity: Value,
    #[validate(custom(function = "validate_present", message = "quantityUnit is required"))]
    #[schema(value_type = String, example = "g")]
    pub quantity_unit: Value,
}

fn validate_present(value: &Value) -> Result<(), ValidationError> {
    match value {
        Value::Null => Err(ValidationError::new("required")),
        Value::String(text) if text.is_empty() => Err(ValidationError::new("required")),
        _ => Ok(()),
    }
}

impl From<FoodJournalEntryRequest> for FoodJournalEntry {
    fn from(entry: FoodJournalEntryRequest) -> Self {
        Self {
            date_time: entry.date_time,
            description: entry.description,
            quantity: entry.quantity,
            quantity_unit: entry.quantity_unit,
        }
    }
}

impl From<GetMealGuidelinesRequest> for GenerateMealPlanInput {
    fn from(request: GetMealGuidelinesRequest) -> Self {
        Self {
            pet: PetDetails {
                name: request.name,
                breed: request.breed,
                gender: request.gender,
                species: request.species,
                age: request.age,
                weight: request.weight,
                activity_level: request.activity_level,
                health_concerns: request.health_concerns,
            },
            food_journal: request
                .food_journal
                .filter(|entries| !entries.is_empty())
                .map(|entries| entries.into_iter().map(FoodJournalEntry::from).collect()),
            existing_recipes: request.existing_recipes,
        }
    }
}
