use async_trait::async_trait;

use crate::errors::ShimError;
use crate::models::generate::{GenerateRequest, GenerateResponse};

#[async_trait]
pub trait GenerateClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ShimError>;
}

pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
}

impl OllamaClient {
    pub fn new(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
        }
    }
}

#[async_trait]
impl GenerateClient for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ShimError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ShimError::BackendError(format!(
                "status {status}, text {text}"
            )));
        }

        Ok(serde_json::from_str(&text)?)
    }
}
