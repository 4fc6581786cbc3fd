use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::{self, Data, PayloadConfig, ServiceConfig};
use actix_web::{App, Error};

use crate::{config, handlers, service};

/// Registers the completions route along with its body size limit.
pub fn configure(cfg: &mut ServiceConfig, max_body_bytes: usize) {
    cfg.service(
        web::resource("/v2/completions")
            .app_data(PayloadConfig::new(max_body_bytes))
            .route(web::post().to(handlers::completions)),
    );
}

pub fn create_app(
    completion_service: Arc<service::CompletionService>,
    config: Arc<config::Config>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let max_body_bytes = config.max_body_bytes;

    App::new()
        .wrap(Logger::default())
        .app_data(Data::from(completion_service))
        .app_data(Data::from(config))
        .configure(|cfg| configure(cfg, max_body_bytes))
}
