use actix_web::HttpRequest;
use ring::hmac;
use ring::rand::SystemRandom;

use crate::consts::AUTH_HEADER;
use crate::errors::ShimError;

/// Outcome of reading the auth header off a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentedToken {
    Absent,
    Token(String),
    Unreadable,
}

pub fn presented_token(req: &HttpRequest) -> PresentedToken {
    match req.headers().get(AUTH_HEADER) {
        None => PresentedToken::Absent,
        Some(value) => match value.to_str() {
            Ok("") => PresentedToken::Absent,
            Ok(token) => PresentedToken::Token(token.to_string()),
            Err(_) => PresentedToken::Unreadable,
        },
    }
}

/// Checks a presented token against the configured one.
///
/// A request without the header is let through. A header that is present must match
/// the configured token exactly; with no token configured every presented value fails.
pub fn verify_auth_token(
    presented: &PresentedToken,
    expected: Option<&str>,
) -> Result<(), ShimError> {
    match presented {
        PresentedToken::Absent => Ok(()),
        PresentedToken::Unreadable => Err(ShimError::AuthError),
        PresentedToken::Token(token) => {
            let expected = expected.ok_or(ShimError::AuthError)?;
            tokens_match(token.as_bytes(), expected.as_bytes())
        }
    }
}

/// Constant-time equality: both sides are MACed under a one-off random key and
/// `hmac::verify` compares the tags without early exit.
fn tokens_match(presented: &[u8], expected: &[u8]) -> Result<(), ShimError> {
    let key = hmac::Key::generate(hmac::HMAC_SHA256, &SystemRandom::new())
        .map_err(|_| ShimError::AuthError)?;
    let expected_tag = hmac::sign(&key, expected);
    hmac::verify(&key, presented, expected_tag.as_ref()).map_err(|_| ShimError::AuthError)
}
