use utoipa::OpenApi;

use crate::application::http::{
    health::{__path_live, __path_root},
    nutrition::router::NutritionApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "PawPlan API",
        description = "Breed-aware meal plans for dogs and cats, generated by a local model"
    ),
    paths(root, live),
    nest(
        (path = "/nutrition", api = NutritionApiDoc),
    )
)]
pub struct ApiDoc;
