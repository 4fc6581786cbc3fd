use std::sync::Arc;

use ollama_shim::app::create_app;
use ollama_shim::config;
use ollama_shim::service::CompletionService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("failed to load config: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    log::info!(
        "Starting completions shim for {} on {}:{} with {} workers...",
        config.model_name,
        config.host,
        config.port,
        config.workers
    );

    let http_client = reqwest::Client::builder()
        .connect_timeout(config.connect_timeout())
        .timeout(config.request_timeout())
        .build()
        .map_err(std::io::Error::other)?;

    let completion_service = Arc::new(CompletionService::with_http_client(http_client, &config));
    let bind_addr = (config.host.clone(), config.port);
    let workers = config.workers;
    let config = Arc::new(config);

    actix_web::HttpServer::new(move || create_app(completion_service.clone(), config.clone()))
        .workers(workers)
        .bind(bind_addr)?
        .run()
        .await
}
