use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

/// Request-boundary error taxonomy. Handlers return this and the
/// `ResponseError` impl translates each variant into a status + `{error}`
/// JSON body; nothing is retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Server error")]
    Storage(#[from] sqlx::Error),

    #[error("{0}")]
    Auth(&'static str),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Storage(e) = self {
            log::error!("Storage error: {e:?}");
        }

        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self, ApiError::Auth(_)) {
            builder.insert_header(("WWW-Authenticate", "Basic realm=\"Restricted\""));
        }
        builder.json(json!({ "error": self.to_string() }))
    }
}
