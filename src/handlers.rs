use actix_web::error::PayloadError;
use actix_web::web::{Bytes, Data};
use actix_web::{HttpRequest, HttpResponse};

use crate::auth::{presented_token, verify_auth_token};
use crate::completion_request::parse_completion_request;
use crate::config;
use crate::errors::ShimError;
use crate::service::CompletionService;

pub async fn completions(
    req: HttpRequest,
    body: Result<Bytes, actix_web::Error>,
    service: Data<CompletionService>,
    config: Data<config::Config>,
) -> Result<HttpResponse, ShimError> {
    let result = handle_completion(&req, body, &service, &config).await;

    if let Err(e) = &result {
        log::error!("completion error: {:?}", e);
    }

    result
}

async fn handle_completion(
    req: &HttpRequest,
    body: Result<Bytes, actix_web::Error>,
    service: &CompletionService,
    config: &config::Config,
) -> Result<HttpResponse, ShimError> {
    verify_auth_token(&presented_token(req), config.auth_token.as_deref())?;

    let body = body.map_err(|e| body_error(&e, config.max_body_bytes))?;
    let request = parse_completion_request(&body)?;
    log::info!("Received completion request ({} bytes)", body.len());

    let completion = service.create_completion(request, config).await?;

    Ok(HttpResponse::Ok().json(completion))
}

fn body_error(err: &actix_web::Error, limit: usize) -> ShimError {
    match err.as_error::<PayloadError>() {
        Some(PayloadError::Overflow) => {
            ShimError::ValidationError(format!("Request body exceeds {limit} bytes"))
        }
        _ => ShimError::ParseError(err.to_string()),
    }
}
