use serde::{Deserialize, Serialize};

use crate::domain::pet::value_objects::PetDetails;

#[derive(Debug, Clone, Default)]
pub struct GenerateMealPlanInput {
    pub pet: PetDetails,
    pub food_journal: Option<Vec<FoodJournalEntry>>,
    pub existing_recipes: Option<Vec<String>>,
}

/// One past feeding event.
///
/// Fields stay raw JSON: `dateTime` may be an ISO string or an epoch number,
/// and every value is echoed into the prompt as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodJournalEntry {
    pub date_time: serde_json::Value,
    pub description: serde_json::Value,
    pub quantity: serde_json::Value,
    pub quantity_unit: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    Text,
    #[default]
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GenerationOptions {
    pub format: ResponseFormat,
    /// Generation halts as soon as the model emits one of these.
    pub stop: Vec<String>,
}

impl GenerationOptions {
    pub fn json_with_stop<I, S>(stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            format: ResponseFormat::Json,
            stop: stop.into_iter().map(Into::into).collect(),
        }
    }
}
