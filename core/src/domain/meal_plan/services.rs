use tracing::{debug, error, info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    meal_plan::{
        entities::MealPlanResult,
        parser::parse_meal_plan,
        ports::{LLMClient, MealPlanService},
        prompt::{STOP_MARKERS, compose_prompt},
        value_objects::{GenerateMealPlanInput, GenerationOptions},
    },
    pet::validation::validate_pet_details,
};

impl<LLM> MealPlanService for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(
        skip(self, input),
        fields(plan_id = %generate_uuid_v7(), species = %input.pet.species)
    )]
    async fn generate_meal_plan(
        &self,
        input: GenerateMealPlanInput,
    ) -> Result<MealPlanResult, CoreError> {
        // 1. Validate pet details
        let profile = validate_pet_details(&self.breed_registry, &input.pet).map_err(|e| {
            info!(reasons = ?e.reasons, "Rejected pet details");
            CoreError::from(e)
        })?;

        // 2. Build prompt
        let prompt = compose_prompt(
            &profile,
            input.food_journal.as_deref(),
            input.existing_recipes.as_deref(),
        );
        debug!(
            prompt_len = prompt.len(),
            journal_entries = input.food_journal.as_ref().map_or(0, Vec::len),
            "Composed meal plan prompt"
        );

        // 3. Call LLM
        let raw_response = self
            .llm_client
            .complete(prompt, GenerationOptions::json_with_stop(STOP_MARKERS))
            .await
            .inspect_err(|e| error!("Meal plan completion failed: {}", e))?;

        // 4. Parse response
        let plan = parse_meal_plan(&raw_response)?;
        info!(recipes = plan.ingredients.len(), "Generated meal plan");

        Ok(plan)
    }
}
