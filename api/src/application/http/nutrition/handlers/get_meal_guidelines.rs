use axum::extract::State;
use pawplan_core::domain::meal_plan::{entities::MealPlanResult, ports::MealPlanService};

use crate::application::http::{
    nutrition::validators::GetMealGuidelinesRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/get_meal_guidelines",
    tag = "nutrition",
    summary = "Generate a meal plan for a pet",
    description = "Validates the pet, asks the local model for a plan and returns it as structured JSON",
    responses(
        (status = 200, body = MealPlanResult),
        (status = 400, body = ApiErrorResponse, description = "Invalid pet data or request body"),
        (status = 500, body = ApiErrorResponse, description = "Model unavailable or returned unusable output"),
    ),
    request_body = GetMealGuidelinesRequest
)]
pub async fn get_meal_guidelines(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GetMealGuidelinesRequest>,
) -> Result<Response<MealPlanResult>, ApiError> {
    let plan = state
        .service
        .generate_meal_plan(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(plan))
}
