use std::sync::Arc;
use std::time::Instant;

use crate::completion_request::{build_completion, build_generate_request, resolve_system_prompt};
use crate::config;
use crate::errors::ShimError;
use crate::models::request;
use crate::models::response::Completion;
use crate::ollama_client::{GenerateClient, OllamaClient};

/// Runs one completion: translate, call the backend once, translate back.
pub struct CompletionService {
    client: Arc<dyn GenerateClient>,
}

impl CompletionService {
    pub fn new(client: Arc<dyn GenerateClient>) -> Self {
        Self { client }
    }

    pub fn with_http_client(http_client: reqwest::Client, config: &config::Config) -> Self {
        Self::new(Arc::new(OllamaClient::new(
            http_client,
            &config.api_endpoint,
        )))
    }

    pub async fn create_completion(
        &self,
        request: request::CompletionCreate,
        config: &config::Config,
    ) -> Result<Completion, ShimError> {
        log::debug!("system prompt: {:?}", resolve_system_prompt(&request));

        let generate_request = build_generate_request(request, config)?;

        log::info!("Sending request to backend for model: {}", config.model_name);
        log::debug!("payload: {:?}", generate_request);

        let start = Instant::now();
        let response = self.client.generate(generate_request).await?;
        let elapsed = start.elapsed();

        let completion = build_completion(response, config, elapsed)?;

        log::info!(
            "Request processed in {:.2}s, generated {} tokens",
            elapsed.as_secs_f64(),
            completion.usage.completion_tokens
        );

        Ok(completion)
    }
}
