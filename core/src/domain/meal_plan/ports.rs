use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::MealPlanResult,
        value_objects::{GenerateMealPlanInput, GenerationOptions},
    },
};

/// LLM Client trait for calling the completion service
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn complete(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for meal plan generation
#[cfg_attr(test, mockall::automock)]
pub trait MealPlanService: Send + Sync {
    fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> impl Future<Output = Result<MealPlanResult, CoreError>> + Send;
}
