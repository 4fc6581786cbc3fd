use std::time::Duration;

use ring::rand::{SecureRandom, SystemRandom};

use crate::config;
use crate::consts;
use crate::errors::ShimError;
use crate::models::generate::{GenerateOptions, GenerateRequest, GenerateResponse};
use crate::models::request;
use crate::models::response::{Choice, Completion, Metadata};
use crate::models::{FinishReason, ObjectType, Usage};

pub(crate) fn parse_completion_request(body: &[u8]) -> Result<request::CompletionCreate, ShimError> {
    Ok(serde_json::from_slice(body)?)
}

pub(crate) fn validate_completion_request(
    request: &request::CompletionCreate,
) -> Result<&str, ShimError> {
    request
        .prompt
        .as_deref()
        .ok_or_else(|| ShimError::ValidationError(consts::MISSING_PROMPT_MESSAGE.to_string()))
}

/// System prompt in effect for a request, falling back to the stock assistant prompt.
///
/// Only logged; the backend request never carries it, so the model's own system
/// prompt stays in effect.
pub(crate) fn resolve_system_prompt(request: &request::CompletionCreate) -> &str {
    request
        .system
        .as_deref()
        .unwrap_or(consts::DEFAULT_SYSTEM_PROMPT)
}

pub(crate) fn build_generate_request(
    request: request::CompletionCreate,
    config: &config::Config,
) -> Result<GenerateRequest, ShimError> {
    let prompt = validate_completion_request(&request)?.to_string();
    let generation_config = request.generation_config.unwrap_or_default();

    Ok(GenerateRequest {
        model: config.model_name.to_string(),
        prompt,
        stream: false,
        options: GenerateOptions {
            temperature: generation_config.temperature.unwrap_or(config.temperature),
            top_p: generation_config.top_p.unwrap_or(config.top_p),
            num_predict: request.max_tokens.unwrap_or(consts::DEFAULT_MAX_TOKENS),
        },
    })
}

pub(crate) fn generate_completion_id() -> Result<String, ShimError> {
    let mut bytes = [0u8; consts::COMPLETION_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| ShimError::ConfigError("system random source unavailable".to_string()))?;
    Ok(format!("{}{}", consts::COMPLETION_ID_PREFIX, hex::encode(bytes)))
}

pub(crate) fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 1000.0).round() / 1000.0
}

pub(crate) fn build_completion(
    response: GenerateResponse,
    config: &config::Config,
    elapsed: Duration,
) -> Result<Completion, ShimError> {
    Ok(Completion {
        id: generate_completion_id()?,
        object: ObjectType::TextCompletion,
        created: chrono::Utc::now().timestamp(),
        model: config.model_name.to_string(),
        choices: vec![Choice {
            text: response.response,
            index: 0,
            logprobs: None,
            finish_reason: FinishReason::Stop,
        }],
        usage: Usage {
            prompt_tokens: response.prompt_eval_count,
            completion_tokens: response.eval_count,
        },
        metadata: Metadata {
            inference_time_seconds: round_seconds(elapsed),
        },
    })
}
