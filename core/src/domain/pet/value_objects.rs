use serde::{Deserialize, Serialize};

/// A pet record as received, before validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetDetails {
    pub name: String,
    pub breed: String,
    pub gender: String,
    pub species: String,
    pub age: serde_json::Value,
    pub weight: serde_json::Value,
    pub activity_level: String,
    pub health_concerns: String,
}

impl Default for PetDetails {
    fn default() -> Self {
        Self {
            name: "Unknown".to_string(),
            breed: "Unknown".to_string(),
            gender: "Unknown".to_string(),
            species: "Unknown".to_string(),
            age: serde_json::json!(0),
            weight: serde_json::json!(0.0),
            activity_level: "Unknown".to_string(),
            health_concerns: "None".to_string(),
        }
    }
}
