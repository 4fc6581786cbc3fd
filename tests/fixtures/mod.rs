use serde_json::{Value, json};

use ollama_shim::config::Config;
use ollama_shim::models::generate::GenerateResponse;

pub const TEST_TOKEN: &str = "test-token";
pub const GENERATE_PATH: &str = "/api/generate";

pub fn create_test_config(base_url: &str) -> Config {
    Config {
        model_name: "test-model".to_string(),
        api_endpoint: format!("{}{}", base_url, GENERATE_PATH),
        auth_token: Some(TEST_TOKEN.to_string()),
        temperature: 0.3,
        top_p: 0.3,
        ..Config::default()
    }
}

pub fn sample_generate_response() -> GenerateResponse {
    GenerateResponse {
        response: "hello".to_string(),
        prompt_eval_count: 5,
        eval_count: 2,
    }
}

pub fn sample_generate_response_json() -> Value {
    json!({
        "model": "test-model",
        "created_at": "2024-01-01T00:00:00Z",
        "response": "hello",
        "done": true,
        "prompt_eval_count": 5,
        "eval_count": 2
    })
}
