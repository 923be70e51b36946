use tracing::{error, warn};

use crate::domain::{
    common::entities::app_errors::CoreError, meal_plan::entities::MealPlanResult,
};

const JSON_FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";
const SHAPE_MISMATCH: &str = "does not match the meal plan shape: ";

/// Removes the code fence a model may wrap its JSON in.
///
/// Steps, in order: trim, drop a leading "```json", drop a trailing "```",
/// trim again. Nothing else is repaired.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let text = text.strip_prefix(JSON_FENCE_OPEN).unwrap_or(text);
    let text = text.strip_suffix(FENCE_CLOSE).unwrap_or(text);
    text.trim()
}

/// Decodes the model's reply into a [`MealPlanResult`].
///
/// Fails with [`CoreError::MalformedModelOutput`] carrying the cleaned text
/// when it is not JSON or lacks a required key.
pub fn parse_meal_plan(raw: &str) -> Result<MealPlanResult, CoreError> {
    let cleaned = strip_code_fences(raw);

    let value: serde_json::Value = serde_json::from_str(cleaned).map_err(|e| {
        error!("Model returned invalid JSON: {}", e);
        CoreError::MalformedModelOutput {
            raw: cleaned.to_string(),
            reason: e.to_string(),
        }
    })?;

    let plan: MealPlanResult = serde_json::from_value(value).map_err(|e| {
        error!("Model JSON does not match the meal plan shape: {}", e);
        CoreError::MalformedModelOutput {
            raw: cleaned.to_string(),
            reason: format!("{}{}", SHAPE_MISMATCH, e),
        }
    })?;

    let empty_fields = plan.empty_fields();
    if !empty_fields.is_empty() {
        warn!(?empty_fields, "Model left meal plan fields empty");
    }

    Ok(plan)
}
