use std::sync::Arc;

use reqwest::Client;

use ollama_shim::config::Config;
use ollama_shim::service::CompletionService;

pub fn create_test_app_components(config: Config) -> (Arc<Config>, Arc<CompletionService>) {
    let completion_service = Arc::new(CompletionService::with_http_client(Client::new(), &config));
    (Arc::new(config), completion_service)
}
