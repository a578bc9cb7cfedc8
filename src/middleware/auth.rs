use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{error::Error, AppState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("missing_authorization")]
    MissingAuthorization,
    #[error("bad_authorization")]
    BadAuthorization,
    #[error("unsupported_scheme")]
    UnsupportedScheme,
    #[error("invalid_token")]
    InvalidToken,
}

/// Checks request credentials. Holds no session state.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, headers: &HeaderMap) -> Result<Claims, TokenError>;
}

/// HS256 bearer JWT verification with expiry checking.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

impl TokenVerifier for JwtVerifier {
    fn verify(&self, headers: &HeaderMap) -> Result<Claims, TokenError> {
        let token = bearer_token(headers)?;
        decode::<Claims>(token, &self.key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::InvalidToken)
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    let auth_header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(TokenError::MissingAuthorization)?;
    let auth_str = auth_header
        .to_str()
        .map_err(|_| TokenError::BadAuthorization)?;
    auth_str
        .strip_prefix("Bearer ")
        .ok_or(TokenError::UnsupportedScheme)
}

/// Rejects the request with 403 before it reaches the handler when the
/// token does not verify; otherwise stores the claims in the extensions.
pub async fn require_token(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    match state.token_verifier.verify(req.headers()) {
        Ok(claims) => {
            req.extensions_mut().insert(claims);
            next.run(req).await
        }
        Err(err) => {
            tracing::debug!(error = %err, path = %req.uri().path(), "Token rejected");
            Error::Forbidden(err.to_string()).into_response()
        }
    }
}
