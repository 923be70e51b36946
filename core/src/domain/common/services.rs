use std::sync::Arc;

use crate::domain::{meal_plan::ports::LLMClient, pet::breeds::BreedRegistry};

pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) breed_registry: Arc<BreedRegistry>,
    pub(crate) llm_client: Arc<LLM>,
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(breed_registry: BreedRegistry, llm_client: LLM) -> Self {
        Self {
            breed_registry: Arc::new(breed_registry),
            llm_client: Arc::new(llm_client),
        }
    }
}

// Clones share the registry and the client; `LLM` need not be `Clone`.
impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            breed_registry: Arc::clone(&self.breed_registry),
            llm_client: Arc::clone(&self.llm_client),
        }
    }
}
