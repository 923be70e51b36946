use tracing::info;

use crate::{
    domain::{
        common::{PawPlanConfig, entities::app_errors::CoreError, services::Service},
        pet::{breeds::BreedRegistry, entities::Species},
    },
    infrastructure::llm::OllamaLLMClient,
};

pub type PawPlanService = Service<OllamaLLMClient>;

/// Builds the service with the reference breeds and a connected Ollama
/// client. Fails when Ollama does not answer.
pub async fn create_service(config: PawPlanConfig) -> Result<PawPlanService, CoreError> {
    let breed_registry = BreedRegistry::default();
    info!(
        dog_breeds = breed_registry.len(Species::Dog),
        cat_breeds = breed_registry.len(Species::Cat),
        "Loaded breed registry"
    );

    let llm_client = OllamaLLMClient::connect(&config.llm).await?;

    Ok(Service::new(breed_registry, llm_client))
}
