use crate::error::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use secrecy::{ExposeSecret, Secret};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Header carrying the shared API secret.
pub const API_TOKEN_HEADER: &str = "api_token";

/// Hyphenated spelling accepted for clients that cannot send underscores.
const API_TOKEN_HEADER_ALIAS: &str = "api-token";

const UNAUTHORIZED_MESSAGE: &str = "Token inválido";

/// Shared secret checked by [`api_token_middleware`].
#[derive(Clone)]
pub struct ApiToken(Arc<Secret<String>>);

impl ApiToken {
    pub fn new(token: Secret<String>) -> Self {
        Self(Arc::new(token))
    }

    /// Byte-for-byte comparison in constant time.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0
            .expose_secret()
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }
}

/// What the request carried in the token header.
enum PresentedToken<'a> {
    Absent,
    /// Present but not visible ASCII.
    Unreadable,
    Value(&'a str),
}

fn extract_token(headers: &HeaderMap) -> PresentedToken<'_> {
    match headers
        .get(API_TOKEN_HEADER)
        .or_else(|| headers.get(API_TOKEN_HEADER_ALIAS))
    {
        None => PresentedToken::Absent,
        Some(value) => match value.to_str() {
            Ok(candidate) => PresentedToken::Value(candidate),
            Err(_) => PresentedToken::Unreadable,
        },
    }
}

/// Rejects requests whose `api_token` header is missing or does not match.
pub async fn api_token_middleware(
    State(token): State<ApiToken>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let authorized = match extract_token(request.headers()) {
        PresentedToken::Value(candidate) => token.matches(candidate),
        PresentedToken::Absent => {
            tracing::warn!(path = %request.uri().path(), "Rejected request without API token");
            return Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE));
        }
        PresentedToken::Unreadable => {
            tracing::warn!(path = %request.uri().path(), "Rejected request with unreadable API token");
            return Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE));
        }
    };

    if !authorized {
        tracing::warn!(path = %request.uri().path(), "Rejected request with invalid API token");
        return Err(AppError::Unauthorized(UNAUTHORIZED_MESSAGE));
    }

    Ok(next.run(request).await)
}
