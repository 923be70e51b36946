use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::{
    common::{LLMConfig, entities::app_errors::CoreError},
    meal_plan::{
        ports::LLMClient,
        value_objects::{GenerationOptions, ResponseFormat},
    },
};

const UNREACHABLE_AT_STARTUP: &str =
    "Could not connect to Ollama service. Please ensure Ollama is running";
const CONNECTION_LOST: &str =
    "Lost connection to Ollama service. Please ensure Ollama is running and accessible.";

/// Client for a local Ollama server.
///
/// Holds one pooled `reqwest::Client`; clones and concurrent calls share it.
#[derive(Debug, Clone)]
pub struct OllamaLLMClient {
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<&'static str>,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    stop: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Deserialize)]
struct VersionResponse {
    version: String,
}

impl OllamaLLMClient {
    /// Builds the client and checks that the server answers.
    pub async fn connect(config: &LLMConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                CoreError::ExternalServiceError(format!("Failed to build HTTP client: {}", e))
            })?;

        let llm_client = Self {
            base_url: config.ollama_url.trim_end_matches('/').to_string(),
            model_name: config.ollama_model.clone(),
            client,
        };

        let version = llm_client.server_version().await.map_err(|e| {
            error!("Ollama is not reachable at {}: {}", llm_client.base_url, e);
            CoreError::ServiceUnavailable(UNREACHABLE_AT_STARTUP.to_string())
        })?;

        info!(
            url = %llm_client.base_url,
            model = %llm_client.model_name(),
            %version,
            "Connected to Ollama"
        );

        Ok(llm_client)
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn server_version(&self) -> Result<String, reqwest::Error> {
        let version: VersionResponse = self
            .client
            .get(format!("{}/api/version", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(version.version)
    }

    async fn call_ollama_api(&self, request: GenerateRequest<'_>) -> Result<String, CoreError> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Ollama API request failed: {}", e);
                transport_error(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Ollama API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let generate_response: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Ollama response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        Ok(generate_response.response)
    }
}

impl LLMClient for OllamaLLMClient {
    async fn complete(
        &self,
        prompt: String,
        options: GenerationOptions,
    ) -> Result<String, CoreError> {
        let request = GenerateRequest {
            model: self.model_name(),
            prompt,
            stream: false,
            format: match options.format {
                ResponseFormat::Json => Some("json"),
                ResponseFormat::Text => None,
            },
            options: GenerateOptions {
                stop: options.stop,
            },
        };

        self.call_ollama_api(request).await
    }
}

fn transport_error(e: reqwest::Error) -> CoreError {
    if e.is_connect() {
        CoreError::ServiceUnavailable(CONNECTION_LOST.to_string())
    } else if e.is_timeout() {
        CoreError::ExternalServiceError(format!("LLM request timed out: {}", e))
    } else {
        CoreError::ExternalServiceError(format!("LLM API error: {}", e))
    }
}
