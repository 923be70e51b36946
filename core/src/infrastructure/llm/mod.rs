pub mod ollama_client;

pub use ollama_client::OllamaLLMClient;
