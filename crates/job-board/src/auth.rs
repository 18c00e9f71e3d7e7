use async_trait::async_trait;
use axum::http::HeaderMap;
use axum_extra::extract::CookieJar;

use crate::board::domain::UserId;

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "session_token";

/// Session lookup against the authentication provider.
///
/// `Ok(None)` means the token is unknown or expired; transport failures
/// surface as `AuthError` and collapse to a 500 at the handler boundary.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(&self, token: &str) -> Result<Option<UserId>, AuthError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Pull the session token out of the request cookies, if any.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
