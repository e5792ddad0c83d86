use std::env;

use actix_web::http::header;
use actix_web::HttpRequest;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::ApiError;

/// Admin credential pair. Present only when both `ADMIN_USER` and
/// `ADMIN_PASS` are configured; otherwise the admin gate is disabled.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    user: String,
    pass: String,
}

impl AdminCredentials {
    pub fn new(user: impl Into<String>, pass: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            pass: pass.into(),
        }
    }

    pub fn from_env() -> Option<Self> {
        let user = env::var("ADMIN_USER").ok().filter(|v| !v.is_empty())?;
        let pass = env::var("ADMIN_PASS").ok().filter(|v| !v.is_empty())?;
        Some(Self { user, pass })
    }
}

/// Checks the request's Basic Authorization header against the configured
/// credentials. A `None` configuration means the gate is open.
pub fn verify_basic_auth(
    req: &HttpRequest,
    credentials: &Option<AdminCredentials>,
) -> Result<(), ApiError> {
    let Some(credentials) = credentials else {
        return Ok(());
    };

    let header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(ApiError::Auth("Missing Authorization header"))?;

    check_credentials(header, credentials)
}

fn check_credentials(header: &str, credentials: &AdminCredentials) -> Result<(), ApiError> {
    let encoded = header
        .strip_prefix("Basic ")
        .ok_or(ApiError::Auth("Missing Authorization header"))?;

    let decoded = BASE64
        .decode(encoded.trim())
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .ok_or(ApiError::Auth("Invalid credentials"))?;

    let (user, pass) = decoded
        .split_once(':')
        .ok_or(ApiError::Auth("Invalid credentials"))?;

    if user == credentials.user && pass == credentials.pass {
        Ok(())
    } else {
        Err(ApiError::Auth("Invalid credentials"))
    }
}
