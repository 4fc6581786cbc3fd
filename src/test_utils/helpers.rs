use crate::config::Config;
use crate::models::request;

pub fn create_test_completion_request(prompt: &str) -> request::CompletionCreate {
    request::CompletionCreate {
        prompt: Some(prompt.to_string()),
        ..Default::default()
    }
}

pub fn create_test_config(api_endpoint: &str) -> Config {
    Config {
        model_name: "test-model".to_string(),
        api_endpoint: api_endpoint.to_string(),
        auth_token: Some("test-token".to_string()),
        ..Config::default()
    }
}
