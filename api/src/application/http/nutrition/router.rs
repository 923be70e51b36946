use axum::{Router, routing::post};
use utoipa::OpenApi;

use super::handlers::get_meal_guidelines::{__path_get_meal_guidelines, get_meal_guidelines};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(get_meal_guidelines))]
pub struct NutritionApiDoc;

pub fn nutrition_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!(
            "{}/nutrition/get_meal_guidelines",
            state.args.server.root_path
        ),
        post(get_meal_guidelines),
    )
}
