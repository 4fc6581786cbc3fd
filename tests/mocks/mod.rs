use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ollama_shim::errors::ShimError;
use ollama_shim::models::generate::{GenerateRequest, GenerateResponse};
use ollama_shim::ollama_client::GenerateClient;

/// Returns queued responses in order and records every request it receives.
#[derive(Default)]
pub struct RecordingClient {
    responses: Arc<Mutex<VecDeque<Result<GenerateResponse, ShimError>>>>,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl RecordingClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_response(&self, response: Result<GenerateResponse, ShimError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn get_calls(&self) -> Vec<GenerateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateClient for RecordingClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, ShimError> {
        self.calls.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ShimError::BackendError("no response queued".to_string())))
    }
}
